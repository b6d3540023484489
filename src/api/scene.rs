//! Conversion of projected geometry into ordered render primitives.

use crate::core::geometry::{HALF_CIRCLE_DEGREES, polar_to_cartesian};
use crate::core::{BarLayout, SectorGeometry, SectorLayout};
use crate::render::{
    ArcPathPrimitive, DataAnnotation, PathCommand, Primitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

/// Distance between a bar's top edge and its value label. Labels of bars
/// shorter than this stop at the baseline.
pub const VALUE_LABEL_INSET_PX: f64 = 15.0;

/// Rotation of the category labels under the bars.
pub const X_AXIS_LABEL_ROTATION_DEG: f64 = -90.0;

const Y_AXIS_TICK_NAMES: [&str; 3] = ["top", "middle", "bottom"];

pub(super) fn bar_primitives(layout: &BarLayout, id: &str, value_labels: bool) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(layout.bars.len() * 3 + layout.y_axis.len());

    for (index, bar) in layout.bars.iter().enumerate() {
        primitives.push(
            RectPrimitive::new(
                format!("{id}-rect-{index}"),
                bar.x,
                bar.y,
                bar.width,
                bar.height,
            )
            .with_annotation(DataAnnotation::new(bar.label.clone(), bar.value))
            .into(),
        );
    }

    if value_labels {
        for (index, bar) in layout.bars.iter().enumerate() {
            primitives.push(
                TextPrimitive::new(
                    format!("{id}-value-{index}"),
                    format_value(bar.value),
                    bar.center_x(),
                    (bar.y + VALUE_LABEL_INSET_PX).min(layout.baseline_y),
                    TextHAlign::Center,
                )
                .into(),
            );
        }
    }

    for (index, bar) in layout.bars.iter().enumerate() {
        primitives.push(
            TextPrimitive::new(
                format!("{id}-x-label-{index}"),
                bar.label.clone(),
                bar.label_anchor.x,
                bar.label_anchor.y,
                TextHAlign::Right,
            )
            .with_rotation(X_AXIS_LABEL_ROTATION_DEG)
            .into(),
        );
    }

    for (tick, name) in layout.y_axis.iter().zip(Y_AXIS_TICK_NAMES) {
        primitives.push(
            TextPrimitive::new(
                format!("{id}-y-label-{name}"),
                format_value(tick.value),
                tick.x,
                tick.y,
                TextHAlign::Left,
            )
            .into(),
        );
    }

    primitives
}

pub(super) fn sector_primitives(layout: &SectorLayout, id: &str) -> Vec<Primitive> {
    layout
        .sectors
        .iter()
        .enumerate()
        .map(|(index, sector)| {
            let commands = if sector.is_full_circle() {
                full_circle_commands(layout, sector)
            } else {
                segment_commands(layout, sector)
            };
            Primitive::from(
                ArcPathPrimitive::new(format!("{id}-path-{index}"), commands)
                    .with_annotation(DataAnnotation::new(sector.label.clone(), sector.value)),
            )
        })
        .collect()
}

/// Outer arc forwards, line to the inner ring, inner arc backwards.
fn segment_commands(layout: &SectorLayout, sector: &SectorGeometry) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(sector.outer_start),
        PathCommand::ArcTo {
            radius: layout.radius,
            large_arc: sector.large_arc,
            sweep: true,
            to: sector.outer_end,
        },
        PathCommand::LineTo(sector.inner_end),
        PathCommand::ArcTo {
            radius: layout.inner_radius,
            large_arc: sector.large_arc,
            sweep: false,
            to: sector.inner_start,
        },
        PathCommand::Close,
    ]
}

/// A 360 degree segment has coinciding endpoints, so each ring is drawn as two
/// half arcs. The hole runs in the opposite direction to stay unfilled.
fn full_circle_commands(layout: &SectorLayout, sector: &SectorGeometry) -> Vec<PathCommand> {
    let opposite = sector.start_angle + HALF_CIRCLE_DEGREES;
    let outer_mid = polar_to_cartesian(layout.center, layout.radius, opposite);

    let mut commands = vec![
        PathCommand::MoveTo(sector.outer_start),
        PathCommand::ArcTo {
            radius: layout.radius,
            large_arc: false,
            sweep: true,
            to: outer_mid,
        },
        PathCommand::ArcTo {
            radius: layout.radius,
            large_arc: false,
            sweep: true,
            to: sector.outer_start,
        },
        PathCommand::Close,
    ];

    if layout.inner_radius > 0.0 {
        let inner_mid = polar_to_cartesian(layout.center, layout.inner_radius, opposite);
        commands.extend([
            PathCommand::MoveTo(sector.inner_start),
            PathCommand::ArcTo {
                radius: layout.inner_radius,
                large_arc: false,
                sweep: false,
                to: inner_mid,
            },
            PathCommand::ArcTo {
                radius: layout.inner_radius,
                large_arc: false,
                sweep: false,
                to: sector.inner_start,
            },
            PathCommand::Close,
        ]);
    }

    commands
}

/// Shortest decimal form of a value (`20.0 -> "20"`, `2.5 -> "2.5"`).
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}
