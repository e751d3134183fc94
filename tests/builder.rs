//! The fluent builder surface: variables, branching, loops, utilities,
//! and the assembled document metadata.

mod common;

use common::{action_types, flow, to_value};
use serde_json::json;
use taioflow::prelude::*;

#[test]
fn set_variable_and_show_text_produce_two_linked_records() {
    let mut flow = flow("Two Records");
    let x = flow.set_variable("x", "hello").unwrap();
    flow.show_text(&x).unwrap();
    let doc = flow.export();
    assert_eq!(doc.actions.len(), 2);

    let value = to_value(&doc);
    let actions = &value["actions"];
    assert_eq!(actions[0]["type"], "@flow.set-variable");
    assert_eq!(actions[0]["parameters"]["value"], json!({"value": "hello"}));
    assert_eq!(actions[0]["parameters"]["name"], json!({"value": "x"}));
    assert_eq!(actions[1]["type"], "@ui.render-text");
    assert_eq!(
        actions[1]["parameters"]["text"],
        json!({"value": "$", "tokens": [{"location": 0, "value": "x"}]})
    );
    assert_eq!(actions[1]["parameters"]["title"], json!({"value": ""}));
}

#[test]
fn variables_interpolate_inside_format_strings() {
    let mut flow = flow("Interpolation");
    let name = flow.set_variable("name", "world").unwrap();
    flow.create_text(format!("hello {name}!")).unwrap();
    let Action::Text { text } = &flow.actions()[1] else {
        panic!("expected @text");
    };
    assert_eq!(text.value, "hello $!");
    assert_eq!(
        text.tokens,
        Some(vec![FlowToken { location: 6, value: "name".into() }])
    );
}

#[test]
fn capture_mints_an_auto_identifier() {
    let mut flow = flow("Capture");
    let tmp = flow.capture("snapshot").unwrap();
    assert!(tmp.id().starts_with("V-"));
    assert_eq!(tmp.id().len(), 8);
    flow.show_text(&tmp).unwrap();
    let Action::RenderText { text, .. } = &flow.actions()[1] else {
        panic!("expected @ui.render-text");
    };
    assert_eq!(
        text.tokens,
        Some(vec![FlowToken { location: 0, value: tmp.id().into() }])
    );
}

#[test]
fn invalid_variable_names_are_rejected_at_declaration() {
    let mut flow = flow("Names");
    for bad in ["", "has space", "naïve", "a{b}"] {
        let err = flow.set_variable(bad, "v").unwrap_err();
        assert_eq!(
            err,
            BuildError::Declaration(DeclarationError::InvalidVariableName { name: bad.into() })
        );
    }
    assert!(flow.actions().is_empty());
}

#[test]
fn builtins_are_read_only() {
    let mut flow = flow("Builtins");
    let clip = flow.builtin(Builtin::Clipboard);
    let err = flow.assign(&clip, "nope").unwrap_err();
    assert_eq!(
        err,
        BuildError::Declaration(DeclarationError::AssignToBuiltin {
            id: "@clipboard.text".into(),
        })
    );
}

#[test]
fn assign_reuses_the_declared_name() {
    let mut flow = flow("Assign");
    let x = flow.set_variable("x", "1").unwrap();
    flow.assign(&x, "2").unwrap();
    let doc = flow.export();
    assert_eq!(
        action_types(&doc.actions),
        vec!["@flow.set-variable", "@flow.set-variable"]
    );
    let Action::SetVariable { value, name } = &doc.actions[1] else {
        panic!("expected @flow.set-variable");
    };
    assert_eq!(name.value, "x");
    assert_eq!(value.value, "2");
}

#[test]
fn get_variable_carries_the_fallback_code() {
    let mut flow = flow("Get");
    let x = flow.set_variable("x", "1").unwrap();
    flow.get_variable(&x, Fallback::FinishRunning);
    let Action::GetVariable { fallback, name } = &flow.actions()[1] else {
        panic!("expected @flow.get-variable");
    };
    assert_eq!(*fallback, 1);
    assert_eq!(name.value, "x");
}

#[test]
fn comments_are_taken_verbatim() {
    let mut flow = flow("Comments");
    let text = format!("{}-{{never-declared}}", common::PREFIX);
    flow.comment(&text);
    let Action::Comment { text: encoded } = &flow.actions()[0] else {
        panic!("expected @comment");
    };
    assert_eq!(encoded.value, text);
    assert_eq!(encoded.tokens, None);
}

#[test]
fn if_else_markers_share_one_block_identifier() {
    let mut flow = flow("Branch");
    let x = flow.set_variable("x", "hello").unwrap();
    flow.if_block(Condition::new(&x, Comparison::EqualTo, "hello"), |flow| {
        flow.show_toast("eq", ToastStyle::Success, false)?;
        Ok(())
    })
    .unwrap()
    .else_branch(|flow| {
        flow.show_toast("ne", ToastStyle::Error, false)?;
        Ok(())
    })
    .unwrap();
    let doc = flow.export();
    assert_eq!(
        action_types(&doc.actions),
        vec![
            "@flow.set-variable",
            "@flow.if",
            "@ui.toast",
            "@flow.else",
            "@ui.toast",
            "@flow.endif",
        ]
    );
    let Action::If { block_identifier: begin, .. } = &doc.actions[1] else {
        panic!("expected @flow.if");
    };
    let Action::Else { block_identifier: mid } = &doc.actions[3] else {
        panic!("expected @flow.else");
    };
    let Action::EndIf { block_identifier: end } = &doc.actions[5] else {
        panic!("expected @flow.endif");
    };
    assert_eq!(begin, mid);
    assert_eq!(mid, end);
}

#[test]
fn else_if_lowers_to_a_nested_conditional() {
    let mut flow = flow("Chain");
    let x = flow.set_variable("x", "2").unwrap();
    flow.if_block(Condition::new(&x, Comparison::EqualTo, "1"), |flow| {
        flow.create_text("one")?;
        Ok(())
    })
    .unwrap()
    .else_if(Condition::new(&x, Comparison::EqualTo, "2"), |flow| {
        flow.create_text("two")?;
        Ok(())
    })
    .unwrap()
    .else_branch(|flow| {
        flow.create_text("other")?;
        Ok(())
    })
    .unwrap();
    let doc = flow.export();
    assert_eq!(
        action_types(&doc.actions),
        vec![
            "@flow.set-variable",
            "@flow.if",    // x == 1
            "@text",
            "@flow.else",
            "@flow.if",    // x == 2, nested in the outer else
            "@text",
            "@flow.else",
            "@text",       // final else body
            "@flow.endif", // nested closes first
            "@flow.endif",
        ]
    );
    let Action::If { block_identifier: outer, .. } = &doc.actions[1] else {
        panic!("expected outer @flow.if");
    };
    let Action::If { block_identifier: inner, .. } = &doc.actions[4] else {
        panic!("expected inner @flow.if");
    };
    let Action::EndIf { block_identifier: first_end } = &doc.actions[8] else {
        panic!("expected inner @flow.endif");
    };
    let Action::EndIf { block_identifier: last_end } = &doc.actions[9] else {
        panic!("expected outer @flow.endif");
    };
    assert_ne!(outer, inner);
    assert_eq!(first_end, inner);
    assert_eq!(last_end, outer);
}

#[test]
fn condition_operands_are_encoded() {
    let mut flow = flow("Operands");
    let x = flow.set_variable("x", "v").unwrap();
    flow.if_block(
        Condition::new(format!("got {x}"), Comparison::MatchesRegex, r"\d+"),
        |_| Ok(()),
    )
    .unwrap()
    .end()
    .unwrap();
    let Action::If { condition, lhs, rhs, .. } = &flow.actions()[1] else {
        panic!("expected @flow.if");
    };
    assert_eq!(*condition, 6);
    assert_eq!(lhs.value, "got $");
    assert_eq!(rhs.value, r"\d+");
    assert_eq!(rhs.tokens, None);
}

#[test]
fn repeat_block_emits_count_and_paired_markers() {
    let mut flow = flow("Repeat");
    let block = flow
        .repeat_block(5, |flow| {
            flow.math("1 + 1")?;
            Ok(())
        })
        .unwrap();
    let doc = flow.export();
    assert_eq!(
        action_types(&doc.actions),
        vec!["@flow.repeat-begin", "@util.math", "@flow.repeat-end"]
    );
    let Action::RepeatBegin { block_identifier, count } = &doc.actions[0] else {
        panic!("expected @flow.repeat-begin");
    };
    assert_eq!(*count, 5);
    assert_eq!(block_identifier, &block);
    // The end marker carries only the identifier.
    let value = to_value(&doc);
    assert_eq!(
        value["actions"][2]["parameters"],
        json!({"blockIdentifier": block})
    );
}

#[test]
fn for_each_serializes_its_options() {
    let mut flow = flow("ForEach");
    flow.for_each(
        "alpha beta",
        ForEachOptions {
            mode: ForEachMode::EachRegexMatch,
            pattern: Param::from(r"\w+"),
            group: 1,
            reverse: true,
        },
        |flow| {
            flow.create_text(Param::default())?;
            Ok(())
        },
    )
    .unwrap();
    let value = to_value(&flow.export());
    let params = &value["actions"][0]["parameters"];
    assert_eq!(params["text"]["value"], "alpha beta");
    assert_eq!(params["mode"], 1);
    assert_eq!(params["pattern"]["value"], r"\w+");
    assert_eq!(params["group"], 1);
    assert_eq!(params["reverse"], true);
}

#[test]
fn client_version_tracks_the_most_demanding_action() {
    let mut plain = flow("Plain");
    plain.comment("nothing fancy");
    assert_eq!(plain.export().client_version, 1);

    let mut looping = flow("Looping");
    looping
        .for_each("a", ForEachOptions::default(), |_| Ok(()))
        .unwrap();
    let doc = looping.export();
    assert_eq!(doc.client_version, 52);
    assert_eq!(doc.client_min_version, 1);
    assert_eq!(doc.build_version, 1);
}

#[test]
fn an_empty_flow_still_exports_a_baseline_version() {
    let doc = flow("Empty").export();
    assert!(doc.actions.is_empty());
    assert_eq!(doc.client_version, 1);
}

#[test]
fn run_script_unwraps_a_function_literal() {
    let mut flow = flow("Script");
    flow.run_script("function main() {\n    const a = 1;\n    return a;\n}");
    let Action::Script { script } = &flow.actions()[0] else {
        panic!("expected @flow.javascript");
    };
    assert_eq!(script.value, "const a = 1;\nreturn a;");
}

#[test]
fn run_script_unwraps_an_arrow_literal() {
    let mut flow = flow("Script");
    flow.run_script("const f = () => {\n  editor.insert('x');\n};");
    let Action::Script { script } = &flow.actions()[0] else {
        panic!("expected @flow.javascript");
    };
    assert_eq!(script.value, "editor.insert('x');");
}

#[test]
fn run_script_keeps_bare_sources_untouched() {
    let mut flow = flow("Script");
    flow.run_script("let x = 1;\nconsole.log(x);");
    let Action::Script { script } = &flow.actions()[0] else {
        panic!("expected @flow.javascript");
    };
    assert_eq!(script.value, "let x = 1;\nconsole.log(x);");
}

#[test]
fn text_case_carries_the_mode_code() {
    let mut flow = flow("Case");
    flow.text_case(Param::default(), TextCaseMode::Capitalize).unwrap();
    let Action::TextCase { mode, .. } = &flow.actions()[0] else {
        panic!("expected @text.case");
    };
    assert_eq!(*mode, 2);
}

#[test]
fn menus_join_items_into_lines() {
    let mut flow = flow("Menu");
    flow.select_from_menu(vec!["apple", "pear"], "Pick a fruit", false)
        .unwrap();
    let value = to_value(&flow.export());
    let params = &value["actions"][0]["parameters"];
    assert_eq!(params["lines"]["value"], "apple\npear");
    assert_eq!(params["prompt"]["value"], "Pick a fruit");
    assert_eq!(params["multiValue"], false);
}

#[test]
fn utility_actions_carry_their_codes() {
    let mut flow = flow("Utilities");
    flow.get_clipboard();
    flow.set_clipboard(Param::default(), true, 60).unwrap();
    flow.open_url("https://example.com", Browser::Safari).unwrap();
    flow.after_delay(1.5);
    flow.finish_running();
    let value = to_value(&flow.export());
    let actions = &value["actions"];
    assert_eq!(actions[0], json!({"type": "@util.get-clipboard"}));
    assert_eq!(actions[1]["parameters"]["localOnly"], true);
    assert_eq!(actions[1]["parameters"]["expireAfter"], 60);
    assert_eq!(actions[2]["parameters"]["browser"], 1);
    assert_eq!(actions[3]["parameters"]["interval"], 1.5);
    assert_eq!(actions[4], json!({"type": "@flow.finish"}));
}

#[test]
fn http_request_encodes_headers_and_body_json() {
    let mut flow = flow("Request");
    let token = flow.set_variable("token", "secret").unwrap();
    flow.http_request(
        "https://api.example.com/v1/items",
        RequestMethod::Post,
        json!({"Authorization": format!("Bearer {token}")}),
        json!({"title": "hi"}),
    )
    .unwrap();
    let Action::Request { body, url, method, headers } = &flow.actions()[1] else {
        panic!("expected @util.request");
    };
    assert_eq!(*method, 1);
    assert_eq!(url.value, "https://api.example.com/v1/items");
    assert_eq!(headers.value, r#"{"Authorization":"Bearer $"}"#);
    let tokens = headers.tokens.as_ref().unwrap();
    assert_eq!(tokens[0].value, "token");
    assert_eq!(body.value, r#"{"title":"hi"}"#);
    assert_eq!(body.tokens, None);
}
