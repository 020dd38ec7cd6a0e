//! エラーハンドリング
//!
//! 全ステージ共通のエラー型。各ステージは内部の失敗をここのバリアント 1 つに分類して返す。
//! 表示文言はユーザー向け（中国語）、終了コードは常に 1。

use std::path::PathBuf;

/// エラー型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// ARK_API_KEY が見つからない。`location` は探した .env の場所
    #[error("未找到ARK_API_KEY配置，请检查.env文件: {}", .location.display())]
    ConfigMissing { location: PathBuf },

    #[error("文件不存在: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("路径不是文件: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("文件编码错误，请确保文件是UTF-8编码: {}", .0.display())]
    Encoding(PathBuf),

    #[error("不支持的文件格式: {extension}")]
    UnsupportedFormat { extension: String },

    /// 旧形式の Word (.doc)。変換を促す
    #[error("不支持旧版Word格式(.doc): {}，请用Word另存为.docx后重试", .0.display())]
    LegacyDoc(PathBuf),

    #[error("Word文档解析失败: {0}")]
    Docx(String),

    #[error("文件内容为空: {}", .0.display())]
    EmptyContent(PathBuf),

    #[error("目录不存在: {}", .0.display())]
    NoDirectory(PathBuf),

    #[error("在 {} 中未找到会议记录文件 (.md/.txt/.docx/.doc)", .0.display())]
    NoFiles(PathBuf),

    /// ピッカーの入力不正（ループ内で再入力を促すだけで、外へは出ない）
    #[error("无效的选择: {0}")]
    InvalidSelection(String),

    /// 認証失敗。元のメッセージはログ用に保持する
    #[error("API密钥验证失败，请检查ARK_API_KEY配置")]
    Auth(String),

    #[error("模型调用失败，请检查模型ID配置: {0}")]
    Model(String),

    #[error("大模型调用失败: {0}")]
    Llm(String),

    /// finish_reason == "length"。部分的な JSON は解釈しない
    #[error("模型输出达到长度上限(max_tokens={max_tokens})被截断，请拆分会议记录后重试")]
    Truncated { max_tokens: u32 },

    #[error("未能从会议记录中提取到信息和行动项")]
    NoTasksExtracted,

    #[error("生成Excel文件失败: {0}")]
    Render(String),

    #[error("用户中断操作")]
    Cancelled,

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Json(String),

    #[error("{0}")]
    Http(String),

    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード。報告されたエラーと中断はすべて 1
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 既知のカテゴリに対する対処ヒント
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigMissing { .. } => Some(
                "请在程序所在目录（或当前目录）创建.env文件，并写入: ARK_API_KEY=<你的API密钥>",
            ),
            Self::UnsupportedFormat { .. } | Self::LegacyDoc(_) => Some(
                "支持的格式: .md .txt .docx；.doc文件请用Word打开后另存为.docx",
            ),
            Self::Docx(_) => Some("Word文档可能已损坏，请用Word打开后重新保存为.docx再试"),
            Self::NoFiles(_) | Self::NoDirectory(_) => Some(
                "请将会议记录文件(.md/.txt/.docx)放到程序所在目录，或直接指定文件路径: mtask <文件>",
            ),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
