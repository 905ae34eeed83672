use crate::types::*;
use colorgrad;
use itertools::Itertools;
use plotters::prelude::*;

use std::error::Error;

/// Renders a `dim`-cell scalar field to a PNG heatmap of roughly `size`
/// pixels. `get_data` returns the value of a cell normalized to `[0, 1]`;
/// values outside are clamped. Cell `(x, 0)` ends up at the bottom-left.
pub fn heatmap<F: Fn(Index2) -> Scalar>(
    size: Index2,
    dim: Index2,
    get_data: F,
    file: String,
    text: &str,
) -> Result<(), Box<dyn Error>> {
    let ratio = dim.y as Scalar / dim.x as Scalar;

    let border_top = if text.is_empty() { 0 } else { 20 };
    let size_px = dim!(size.x, (size.x as Scalar * ratio) as usize + border_top);

    let root = BitMapBackend::new(&file, (size_px.x as u32, size_px.y as u32)).into_drawing_area();
    root.fill(&WHITE)?;

    if !text.is_empty() {
        root.titled(&text, ("sans-serif", 12))?;
    }

    let cg: colorgrad::Gradient = colorgrad::turbo();

    let mut chart = ChartBuilder::on(&root)
        .margin_top(border_top as u32)
        .x_label_area_size(0)
        .y_label_area_size(0)
        .build_cartesian_2d(0.0..(dim.x) as Scalar, 0.0..(dim.y) as Scalar)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;

    let plotting_area = chart.plotting_area();

    for (i, j) in (0..dim.x).cartesian_product(0..dim.y) {
        let c = cg.at(get_data(idx!(i, j)).clamp(0.0, 1.0)).to_rgba8();
        let color = RGBColor(c[0], c[1], c[2]);

        let x = i as Scalar;
        let y = j as Scalar;

        plotting_area.draw(&Rectangle::new(
            [(x, y), (x + 1.0, y + 1.0)],
            ShapeStyle::from(color).filled(),
        ))?;
    }

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;

    return Ok(());
}
