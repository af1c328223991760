//! Render command - fill the e-mail template for a salutation and name.

use clap::Args;

use briefkopf_core::{normalize_anrede, MessageTemplate};

use super::config::load_config;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Salutation, e.g. "Herr" or "Frau"
    #[arg(short, long, default_value = "")]
    anrede: String,

    /// Recipient name
    #[arg(short, long)]
    name: String,

    /// Print the HTML alternative instead of plain text
    #[arg(long)]
    html: bool,
}

pub async fn run(args: RenderArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let template = MessageTemplate::from_config(&config.template)?;

    let anrede = normalize_anrede(args.anrede.trim());
    let message = template.render(&anrede, args.name.trim());

    println!("Subject: {}", message.subject);
    println!();
    if args.html {
        println!("{}", message.html_body());
    } else {
        println!("{}", message.body);
    }

    Ok(())
}
