use super::fakes::{at, chat_response, task_json, xlsx_part, Harness, ScriptedFactory};
use crate::domain::{PickOutcome, PipelineEvent, TaskCategory};
use crate::usecase::{RunOutcome, RunRequest};
use common::error::Error;
use serde_json::json;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

const MEETING: &str = "周会：老王负责完成报告，截止到2024-01-01";

fn one_action_reply() -> ScriptedFactory {
    ScriptedFactory::replying(chat_response(
        &json!({ "tasks": [task_json("行动", "完成报告", "老王", "2024-01-01", "")] }),
        "stop",
    ))
}

fn request(input: Option<&str>, dir: &str) -> RunRequest {
    RunRequest {
        input: input.map(PathBuf::from),
        output: PathBuf::from("/out/reports/meeting_tasks.xlsx"),
        discovery_dir: PathBuf::from(dir),
    }
}

fn docx_bytes(document_xml: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_weekly_meeting_produces_one_row() {
    let h = Harness::new(one_action_reply());
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));

    let outcome = h
        .use_case()
        .run(&request(Some("/notes/周会.md"), "/notes"))
        .unwrap();

    let summary = match outcome {
        RunOutcome::Completed(s) => s,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(summary.result.len(), 1);
    let task = &summary.result.tasks()[0];
    assert_eq!(task.category, TaskCategory::Action);
    assert_eq!(task.owner, "老王");
    assert_eq!(task.due, "2024-01-01");

    let bytes = h.fs.file("/out/reports/meeting_tasks.xlsx").expect("xlsx written");
    let sheet = xlsx_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet.matches("<row ").count(), 2);
    let strings = xlsx_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("完成报告"));

    // 送信内容: 会議記録そのまま、構造化出力、上限と温度
    let requests = h.llm.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let payload = &requests[0];
    assert_eq!(payload["model"], "test-model");
    assert_eq!(payload["max_tokens"], 2000);
    assert!((payload["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    assert_eq!(payload["response_format"]["type"], "json_schema");
    assert_eq!(payload["response_format"]["json_schema"]["name"], "meeting_response");
    assert_eq!(payload["response_format"]["json_schema"]["strict"], true);
    assert_eq!(payload["messages"][0]["role"], "system");
    assert!(payload["messages"][1]["content"]
        .as_str()
        .unwrap()
        .ends_with(MEETING));
}

#[test]
fn test_progress_events_in_stage_order() {
    let h = Harness::new(one_action_reply());
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
    h.use_case()
        .run(&request(Some("/notes/周会.md"), "/notes"))
        .unwrap();

    let events = h.progress.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            PipelineEvent::LoadingConfig,
            PipelineEvent::ConfigLoaded,
            PipelineEvent::ReadingInput {
                path: PathBuf::from("/notes/周会.md")
            },
            PipelineEvent::InputRead {
                chars: MEETING.chars().count()
            },
            PipelineEvent::Extracting,
            PipelineEvent::Extracted { count: 1 },
            PipelineEvent::Rendering,
            PipelineEvent::Rendered {
                path: PathBuf::from("/out/reports/meeting_tasks.xlsx"),
                count: 1
            },
        ]
    );
}

#[test]
fn test_missing_api_key_stops_before_any_output() {
    let h = Harness::new(one_action_reply()).with_settings(None);
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));

    let err = h
        .use_case()
        .run(&request(Some("/notes/周会.md"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigMissing { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.hint().unwrap().contains("ARK_API_KEY"));
    assert_eq!(h.llm.request_count(), 0);
    assert!(h.fs.file("/out/reports/meeting_tasks.xlsx").is_none());
}

#[test]
fn test_legacy_doc_is_rejected_with_remedy() {
    let h = Harness::new(one_action_reply());
    h.fs.add_file("/notes/旧纪要.doc", "binary word 97 content", at(15, 9));

    let err = h
        .use_case()
        .run(&request(Some("/notes/旧纪要.doc"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::LegacyDoc(_)));
    assert!(err.to_string().contains(".docx"));
    assert!(err.hint().is_some());
    assert_eq!(err.exit_code(), 1);
    assert_eq!(h.llm.request_count(), 0);
}

#[test]
fn test_no_files_fails_without_prompt() {
    let h = Harness::new(one_action_reply()).with_pick(Ok(PickOutcome::Quit));
    h.fs.add_dir("/empty");
    h.fs.add_file("/empty/picture.png", "not a note at all", at(15, 9));

    let err = h.use_case().run(&request(None, "/empty")).unwrap_err();
    assert!(matches!(err, Error::NoFiles(ref d) if d == Path::new("/empty")));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(h.picker.times_shown(), 0);
    assert_eq!(h.settings.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_quit_at_picker_runs_nothing_else() {
    let h = Harness::new(one_action_reply()).with_pick(Ok(PickOutcome::Quit));
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));

    let outcome = h.use_case().run(&request(None, "/notes")).unwrap();
    assert_eq!(outcome, RunOutcome::Quit);
    assert_eq!(h.picker.times_shown(), 1);
    assert_eq!(h.settings.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.llm.request_count(), 0);
    assert!(h.progress.events.lock().unwrap().is_empty());
}

#[test]
fn test_picked_file_flows_through_pipeline() {
    let h = Harness::new(one_action_reply())
        .with_pick(Ok(PickOutcome::Selected(PathBuf::from("/notes/b.txt"))));
    h.fs.add_file("/notes/a.md", "较早的会议记录内容", at(10, 9));
    h.fs.add_file("/notes/b.txt", MEETING, at(15, 9));

    let outcome = h.use_case().run(&request(None, "/notes")).unwrap();
    match outcome {
        RunOutcome::Completed(summary) => assert_eq!(summary.input, PathBuf::from("/notes/b.txt")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(
        *h.picker.offered.lock().unwrap(),
        vec![vec!["b.txt".to_string(), "a.md".to_string()]]
    );
}

#[test]
fn test_eof_at_picker_is_cancelled() {
    let h = Harness::new(one_action_reply()).with_pick(Err(Error::Cancelled));
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
    let err = h.use_case().run(&request(None, "/notes")).unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_docx_paragraphs_then_table_rows_reach_model() {
    let h = Harness::new(one_action_reply());
    let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>评审会</w:t></w:r></w:p>
<w:p/>
<w:tbl>
<w:tr><w:tc><w:p><w:r><w:t>负责人</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>事项</w:t></w:r></w:p></w:tc></w:tr>
<w:tr><w:tc><w:p/></w:tc><w:tc><w:p/></w:tc></w:tr>
<w:tr><w:tc><w:p><w:r><w:t>老王</w:t></w:r></w:p></w:tc><w:tc><w:p/></w:tc></w:tr>
</w:tbl>
<w:p><w:r><w:t>散会</w:t></w:r></w:p>
</w:body></w:document>"#;
    h.fs.add_file("/notes/评审.docx", docx_bytes(xml), at(15, 9));

    h.use_case()
        .run(&request(Some("/notes/评审.docx"), "/notes"))
        .unwrap();

    let requests = h.llm.requests.lock().unwrap();
    let user = requests[0]["messages"][1]["content"].as_str().unwrap();
    assert!(
        user.ends_with("评审会\n散会\n负责人 | 事项\n老王"),
        "unexpected prompt: {}",
        user
    );
}

#[test]
fn test_corrupt_docx() {
    let h = Harness::new(one_action_reply());
    h.fs.add_file("/notes/坏.docx", "this is not a zip archive", at(15, 9));
    let err = h
        .use_case()
        .run(&request(Some("/notes/坏.docx"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::Docx(_)));
    assert!(err.hint().is_some());
}

#[test]
fn test_truncated_response_is_reported() {
    let h = Harness::new(ScriptedFactory::replying(chat_response(
        &json!("{\"tasks\": [{\"任务类型\": \"行动\""),
        "length",
    )));
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
    let err = h
        .use_case()
        .run(&request(Some("/notes/周会.md"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::Truncated { max_tokens: 2000 }));
    assert!(h.fs.file("/out/reports/meeting_tasks.xlsx").is_none());
}

#[test]
fn test_empty_task_list_never_reaches_renderer() {
    let h = Harness::new(ScriptedFactory::replying(chat_response(
        &json!({ "tasks": [] }),
        "stop",
    )));
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
    let err = h
        .use_case()
        .run(&request(Some("/notes/周会.md"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::NoTasksExtracted));
    assert!(h.fs.file("/out/reports/meeting_tasks.xlsx").is_none());
}

#[test]
fn test_provider_failures_are_classified() {
    let cases: [(&str, fn(&Error) -> bool); 3] = [
        (
            "Chat completions error: HTTP 401 Unauthorized: invalid api key",
            |e| matches!(e, Error::Auth(_)),
        ),
        (
            "Chat completions error: HTTP 404 Not Found: The model does not exist",
            |e| matches!(e, Error::Model(_)),
        ),
        ("HTTP request failed: connection refused", |e| {
            matches!(e, Error::Llm(_))
        }),
    ];
    for (message, expected) in cases {
        let h = Harness::new(ScriptedFactory::failing(message));
        h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
        let err = h
            .use_case()
            .run(&request(Some("/notes/周会.md"), "/notes"))
            .unwrap_err();
        assert!(expected(&err), "{} -> {:?}", message, err);
    }
}

#[test]
fn test_rerun_overwrites_output() {
    let h = Harness::new(one_action_reply());
    h.fs.add_file("/notes/周会.md", MEETING, at(15, 9));
    let req = request(Some("/notes/周会.md"), "/notes");
    h.use_case().run(&req).unwrap();
    h.use_case().run(&req).unwrap();

    let bytes = h.fs.file("/out/reports/meeting_tasks.xlsx").unwrap();
    let sheet = xlsx_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet.matches("<row ").count(), 2);
}

#[test]
fn test_missing_input_file() {
    let h = Harness::new(one_action_reply());
    h.fs.add_dir("/notes");
    let err = h
        .use_case()
        .run(&request(Some("/notes/none.md"), "/notes"))
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}
