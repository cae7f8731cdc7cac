use colored::*;
use ghcoord_common::geo::Transformation;
use ghcoord_core::form::OutputFields;

use crate::terminal::colors;

/// Renders the two output fields the way the form shows them.
pub fn output_to_detail(fields: &OutputFields) -> Vec<(String, ColoredString)> {
    let value_color = if fields.is_error() { colors::ERROR } else { colors::VALUE };

    vec![
        ("X".to_string(), fields.x.color(value_color).bold()),
        ("Y".to_string(), fields.y.color(value_color)),
    ]
}

/// Axis labels for the input side of a selection, e.g. `X (Longitude)`.
pub fn input_labels(transformation: Transformation) -> (String, String) {
    let (x_axis, y_axis) = transformation.source().axes();
    (format!("X ({x_axis})"), format!("Y ({y_axis})"))
}

pub fn selection_to_detail(transformation: Transformation) -> Vec<(String, ColoredString)> {
    let (source, target) = transformation.systems();
    vec![
        ("From".to_string(), source.label().normal()),
        ("To".to_string(), target.label().normal()),
        ("Slug".to_string(), transformation.slug().color(colors::ACCENT)),
    ]
}
