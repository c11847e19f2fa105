use std::io::{self, Write};

use anyhow::Context;
use scw_client::SupportClient;
use scw_widget::tracing::init_tracing;
use scw_widget::{ChatWidget, WidgetConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = WidgetConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.env);
    tracing::info!(environment = ?config.env, api_url = %config.api_url, "Starting support chat");

    let client = SupportClient::new(config.api_url.clone(), config.request_timeout)
        .context("Failed to build the HTTP client")?;
    let mut widget = ChatWidget::new(client);

    if let Err(err) = widget.initialize().await {
        eprintln!("Could not reach the support backend: {err}");
    }

    render(&widget);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let input = line.trim();
        match input {
            "" => {}
            "q" | "quit" => break,
            "b" | "back" => {
                if widget.show_back_button() {
                    if let Err(err) = widget.go_back().await {
                        eprintln!("Could not go back: {err}");
                    }
                } else {
                    println!("Back is not available here.");
                }
            }
            "r" | "restart" => {
                if let Err(err) = widget.start_again().await {
                    eprintln!("Could not restart: {err}");
                }
            }
            other => match other.parse::<usize>() {
                Ok(choice) if choice >= 1 => {
                    if let Err(err) = widget.select_topic(choice - 1) {
                        eprintln!("{err}");
                    }
                }
                _ => {
                    println!("Commands: a topic number, 'b' (back), 'r' (start again), 'q' (quit).");
                }
            },
        }

        render(&widget);
        prompt();
    }

    Ok(())
}

/// Draws the current widget snapshot: header, breadcrumb, choices.
fn render(widget: &ChatWidget) {
    let session = widget.session();

    println!();
    match widget.representative_name() {
        Some(name) => println!("You are chatting with {name}"),
        None => println!("You are chatting with our support team"),
    }
    if let Some(image) = widget.representative_image() {
        println!("  avatar: {image}");
    }

    let mut trail: Vec<&str> = session
        .history()
        .iter()
        .map(|topic| topic.name.as_str())
        .collect();
    if let Some(selected) = session.selected_topic() {
        trail.push(selected.name.as_str());
    }
    if !trail.is_empty() {
        println!("  topic: {}", trail.join(" > "));
    }
    println!();

    if session.depth_reached() {
        println!("Thanks! A teammate will pick this up shortly.");
        println!("Press 'r' to start again, or 'q' to quit.");
        return;
    }

    if session.current_topics().is_empty() {
        println!("No topics are available right now. Press 'r' to try again, or 'q' to quit.");
        return;
    }

    if session.at_first_level() {
        println!("What do you need help with?");
    } else {
        println!("Anything more specific?");
    }
    for (position, topic) in session.current_topics().iter().enumerate() {
        println!("  {}. {}", position + 1, topic.name);
    }

    let mut controls = vec!["number = choose"];
    if widget.show_back_button() {
        controls.push("b = back");
    }
    controls.push("r = start again");
    controls.push("q = quit");
    println!("  [{}]", controls.join(", "));
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
