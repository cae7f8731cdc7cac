use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use colored::*;
use ghcoord_common::config::Config;
use ghcoord_common::geo::{Transformation, TransformationResult};
use ghcoord_core::form::Form;
use ghcoord_core::service::TransformationService;

use crate::terminal::{colors, format, print};

pub fn convert(
    x: &str,
    y: &str,
    selection: &str,
    output: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<ExitCode> {
    let mut form = Form::new(TransformationService::standard());
    let result: TransformationResult = form.transform(x, y, selection);

    if cfg.quiet < 2 {
        print_request(x, y, selection);
    }
    print_output(&form, cfg);

    let TransformationResult::Success(_) = result else {
        return Ok(ExitCode::FAILURE);
    };

    if let Some(path) = output {
        form.save(&path)
            .with_context(|| format!("could not save report to {}", path.display()))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn print_request(x: &str, y: &str, selection: &str) {
    match selection.parse::<Transformation>() {
        Ok(transformation) => {
            let (x_label, y_label) = format::input_labels(transformation);
            print::aligned_line("Selection", transformation.label().color(colors::ACCENT));
            print::aligned_line(&x_label, x);
            print::aligned_line(&y_label, y);
        }
        Err(_) => {
            print::aligned_line("Selection", selection.color(colors::ERROR));
        }
    }
}

fn print_output(form: &Form, cfg: &Config) {
    let fields = form.output();

    if cfg.quiet >= 2 {
        print::print(&format!("{}\n{}", fields.x, fields.y));
        return;
    }

    print::tree_head(0, "Output Coordinates");
    print::as_tree_one_level(format::output_to_detail(fields));
}
