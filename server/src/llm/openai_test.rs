use super::*;
use crate::llm::types::Role;

// ===== chat completions =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Hello!");
    assert_eq!(resp.model, "gpt-4o");
    assert_eq!(resp.stop, StopReason::EndTurn);
    assert_eq!(resp.usage, TokenUsage { input: 10, output: 5 });
}

#[test]
fn cc_parse_length_maps_to_max_tokens() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "content": "[{\"left\":" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.stop.is_truncated());
    assert_eq!(resp.usage, TokenUsage::default());
}

#[test]
fn cc_parse_null_content_yields_empty_text() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "role": "assistant", "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.text.is_empty());
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    let err = parse_chat_completions_response(&json).unwrap_err();
    assert!(err.to_string().contains("missing choices[0]"));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(matches!(parse_chat_completions_response("{"), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_messages_lead_with_system() {
    let msgs = build_chat_completions_messages("seja breve", &[Message::user("gere")]);
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].role, "system");
    assert_eq!(msgs[0].content, "seja breve");
    assert_eq!(msgs[1].role, "user");
    assert_eq!(msgs[1].content, "gere");
}

#[test]
fn cc_messages_skip_blank_system_and_empty_bodies() {
    let empty = Message { role: Role::Assistant, content: String::new() };
    let msgs = build_chat_completions_messages("  ", &[Message::user("oi"), empty]);
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].role, "user");
}

// ===== responses API =====

#[test]
fn resp_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "Done!" }]
        }],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Done!");
    assert_eq!(resp.stop, StopReason::EndTurn);
    assert_eq!(resp.usage.input, 15);
}

#[test]
fn resp_parse_ignores_non_message_items() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [
            { "type": "reasoning", "summary": [] },
            { "type": "function_call", "call_id": "fc_1", "name": "x", "arguments": "{}" },
            { "type": "message", "content": [{ "type": "output_text", "text": "ok" }] }
        ]
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "ok");
}

#[test]
fn resp_parse_joins_output_parts() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "content": [
                { "type": "output_text", "text": "[{\"left\":" },
                { "type": "refusal", "refusal": "no" },
                { "type": "output_text", "text": "\"A\"}]" }
            ]
        }]
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "[{\"left\":\"A\"}]");
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Fallback text");
    assert_eq!(resp.usage, TokenUsage { input: 5, output: 3 });
}

#[test]
fn resp_parse_incomplete_maps_to_max_tokens() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [],
        "incomplete_details": { "reason": "max_output_tokens" }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.stop, StopReason::MaxTokens);
}

#[test]
fn resp_input_wraps_text_as_input_text() {
    let input = build_responses_input(&[Message::user("gere")]);
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "type": "message",
            "role": "user",
            "content": [{ "type": "input_text", "text": "gere" }]
        }])
    );
}

#[test]
fn client_trims_trailing_slash() {
    let client = OpenAiClient::new(
        "sk".into(),
        OpenAiApiMode::ChatCompletions,
        "https://example.test/v1/".into(),
        LlmTimeouts::default(),
    )
    .unwrap();
    assert_eq!(client.base_url, "https://example.test/v1");
}
