use clap::{Parser, ValueEnum};
use std::fs;
use taioflow::prelude::*;

/// Which of the bundled demo workflows to generate.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Greets the user and branches on the answer
    Greeter,
    /// Collects unchecked checklist items from the open document
    Checklist,
    /// Fetches a URL and copies the response
    Fetch,
}

/// Generates Taio workflow documents and prints them as importable JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The demo workflow to generate
    #[arg(value_enum, default_value_t = Demo::Greeter)]
    demo: Demo,

    /// Override the workflow name shown in the app
    #[arg(short, long)]
    name: Option<String>,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Indent width of the emitted JSON
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() {
    let cli = Cli::parse();

    let document = match cli.demo {
        Demo::Greeter => build_greeter(cli.name.as_deref()),
        Demo::Checklist => build_checklist(cli.name.as_deref()),
        Demo::Fetch => build_fetch(cli.name.as_deref()),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to build workflow: {}", e)));

    let json = document
        .to_json_indented(cli.indent)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize workflow: {}", e)));

    match cli.output {
        Some(path) => {
            fs::write(&path, &json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!("Wrote {} ({} actions)", path, document.actions.len());
        }
        None => println!("{}", json),
    }
}

fn build_greeter(name: Option<&str>) -> Result<FlowDocument> {
    let mut flow = FlowBuilder::new(name.unwrap_or("Greeter"))
        .with_summary("Greets the current selection, or the whole world");

    let selection = flow.builtin(Builtin::SelectedText);
    let who = flow.set_variable("who", &selection)?;
    flow.if_block(Condition::new(&who, Comparison::EqualTo, ""), |flow| {
        flow.assign(&who, "world")?;
        Ok(())
    })?
    .end()?;
    flow.create_text(format!("hello, {who}!"))?;
    flow.show_text(Param::default())?;
    Ok(flow.export())
}

fn build_checklist(name: Option<&str>) -> Result<FlowDocument> {
    let mut flow = FlowBuilder::new(name.unwrap_or("Open Tasks"))
        .with_summary("Copies every unchecked task in the document")
        .with_icon("checklist", "#34C759");

    let full_text = flow.builtin(Builtin::FullText);
    let tasks = flow.set_variable("tasks", "")?;
    flow.for_each(&full_text, ForEachOptions::default(), |flow| {
        let line = flow.builtin(Builtin::LastResult);
        flow.if_block(
            Condition::new(&line, Comparison::BeginsWith, "- [ ]"),
            |flow| {
                flow.assign(&tasks, format!("{tasks}\n{line}"))?;
                Ok(())
            },
        )?
        .end()?;
        Ok(())
    })?;
    flow.set_clipboard(&tasks, false, 0)?;
    flow.show_toast("Tasks copied", ToastStyle::Success, false)?;
    Ok(flow.export())
}

fn build_fetch(name: Option<&str>) -> Result<FlowDocument> {
    let mut flow = FlowBuilder::new(name.unwrap_or("Fetch Quote"))
        .with_summary("Requests a quote of the day and copies it")
        .with_icon("network", "#5856D6");

    flow.http_request(
        "https://zenquotes.io/api/today",
        RequestMethod::Get,
        serde_json::json!({}),
        serde_json::json!({}),
    )?;
    let response = flow.capture(Param::default())?;
    flow.run_script(
        "function main() {\n    const quote = JSON.parse($input)[0];\n    return quote.q;\n}",
    );
    flow.set_clipboard(Param::default(), false, 0)?;
    flow.show_toast(format!("Copied: {response}"), ToastStyle::TextOnly, false)?;
    Ok(flow.export())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
