use colored::*;
use ghcoord_common::config::Config;
use ghcoord_common::geo::Transformation;
use ghcoord_core::service::TransformationService;

use crate::gprint;
use crate::terminal::{colors, format, print};

pub fn systems(cfg: &Config) {
    let service = TransformationService::standard();
    let registry = service.registry();

    for definition in registry.iter() {
        let (x_axis, y_axis) = definition.system.axes();
        print::aligned_line(
            definition.system.slug(),
            format!(
                "{} {} ({}, {})",
                definition.authority().color(colors::ACCENT),
                definition.name,
                x_axis,
                y_axis
            ),
        );
        if cfg.quiet == 0 {
            print::print(&format!("    {}", definition.proj.color(colors::SEPARATOR)));
        }
    }

    gprint!();
    print::header("transformations", cfg.quiet);

    for (idx, transformation) in Transformation::ALL.into_iter().enumerate() {
        print::tree_head(idx, &transformation.label());
        print::as_tree_one_level(format::selection_to_detail(transformation));
    }
}
