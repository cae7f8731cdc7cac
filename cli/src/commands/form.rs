//! Interactive conversion form.
//!
//! Works like the conversion window: the selection is free text (like an
//! editable drop-down), the output fields show either the result or `Error`
//! with a reason, and `save` writes the last result to a file.

use std::path::PathBuf;

use colored::*;
use console::Term;
use ghcoord_common::config::Config;
use ghcoord_common::geo::Transformation;
use ghcoord_core::form::{Form, SaveOutcome, SaveTarget};
use ghcoord_core::service::TransformationService;
use tracing::{error, warn};

use crate::gprint;
use crate::terminal::{colors, format, print};

const COMMANDS: [(&str, &str); 6] = [
    ("transform", "enter X and Y and transform them"),
    ("select", "change the transformation"),
    ("save", "write the last result to a text file"),
    ("clear", "empty the output fields"),
    ("help", "show this list"),
    ("quit", "leave the form"),
];

/// Prompts for a file name on the terminal.
struct PromptDialog<'a> {
    term: &'a Term,
}

impl SaveTarget for PromptDialog<'_> {
    fn choose_path(&self) -> Option<PathBuf> {
        match ask(self.term, "Save as (empty to cancel):") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
            Ok(_) => None,
            Err(err) => {
                warn!("Could not read a file name, save cancelled: {}", err);
                None
            }
        }
    }
}

pub fn form(cfg: &Config) -> anyhow::Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!("the form needs an interactive terminal, use `convert` for scripted input");
    }

    let mut form = Form::new(TransformationService::standard());
    let mut selection: String = Transformation::default().label();

    print_help();

    loop {
        let prompt = format!("{} {}", "ghcoord".color(colors::PRIMARY), ">".color(colors::SEPARATOR));
        let command = ask(&term, &prompt)?;

        match command.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "t" | "transform" => transform(&term, &mut form, &selection, cfg)?,
            "s" | "select" => {
                if let Some(choice) = select(&term)? {
                    selection = choice;
                }
                print::aligned_line("Selection", selection.color(colors::ACCENT));
            }
            "w" | "save" => save(&term, &mut form, cfg),
            "c" | "clear" => {
                form.clear();
                print::print_status("Output cleared");
            }
            "h" | "help" | "?" => print_help(),
            "q" | "quit" | "exit" => break,
            other => warn!("Unknown command '{}', type 'help' for a list", other),
        }
    }

    Ok(())
}

fn transform(term: &Term, form: &mut Form, selection: &str, cfg: &Config) -> anyhow::Result<()> {
    let (x_label, y_label) = match selection.parse::<Transformation>() {
        Ok(transformation) => format::input_labels(transformation),
        Err(_) => ("X".to_string(), "Y".to_string()),
    };

    let raw_x = ask(term, &format!("{}:", x_label))?;
    let raw_y = ask(term, &format!("{}:", y_label))?;

    form.transform(&raw_x, &raw_y, selection);
    print_output(form, cfg);
    Ok(())
}

/// Returns the new selection text; a number picks from the menu.
fn select(term: &Term) -> anyhow::Result<Option<String>> {
    for (idx, transformation) in Transformation::ALL.into_iter().enumerate() {
        print::tree_head(idx, &transformation.label());
    }

    let answer = ask(term, "Selection:")?;

    if answer.trim().is_empty() {
        return Ok(None);
    }

    let choice = match answer.trim().parse::<usize>() {
        Ok(idx) if idx < Transformation::ALL.len() => Transformation::ALL[idx].label(),
        _ => answer,
    };
    Ok(Some(choice))
}

fn save(term: &Term, form: &mut Form, cfg: &Config) {
    let dialog = PromptDialog { term };

    match form.save(&dialog) {
        Ok(SaveOutcome::Saved(_)) => {}
        Ok(SaveOutcome::Cancelled) => print::print_status("Save cancelled"),
        Err(err) => error!("{}", err),
    }
    print_output(form, cfg);
}

fn print_output(form: &Form, cfg: &Config) {
    if cfg.quiet >= 2 {
        print::print(&format!("{}\n{}", form.output().x, form.output().y));
        return;
    }
    print::tree_head(0, "Output Coordinates");
    print::as_tree_one_level(format::output_to_detail(form.output()));
    gprint!();
}

fn print_help() {
    for (command, description) in COMMANDS {
        print::aligned_line(command, description);
    }
    gprint!();
}

/// Reads one line after printing `label`.
fn ask(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(&format!("{} ", label))?;
    term.flush()?;
    Ok(term.read_line()?)
}
