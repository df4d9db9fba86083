use itertools::Itertools;
use ncollide2d::na::Point2;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use std::process::Command;

/// Renders the chord-scaled contour to a PNG with the chord line drawn for
/// reference. The contour is expected in closed order, trailing edge to
/// trailing edge.
pub fn plot_contour(
    points: &[Point2<f64>],
    code: &str,
    chord: f64,
    out_png: &Path,
) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = points
        .iter()
        .map(|p| p.x)
        .minmax()
        .into_option()
        .ok_or("cannot plot an empty contour")?;
    let (y_min, y_max) = points
        .iter()
        .map(|p| p.y)
        .minmax()
        .into_option()
        .ok_or("cannot plot an empty contour")?;

    // pad both axes by a fraction of the chordwise span so thin sections
    // keep a visible band around them
    let pad = 0.05 * (x_max - x_min).max(1e-9);
    let x_range = (x_min - pad)..(x_max + pad);
    let y_range = (y_min.min(0.0) - pad)..(y_max.max(0.0) + pad);

    let root = BitMapBackend::new(out_png, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("NACA {} (chord={})", code, chord), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("x (chord)")
        .y_desc("y")
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().map(|p| (p.x, p.y)), &BLUE))?
        .label(format!("NACA {}", code))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x, p.y), 2, BLUE.filled())),
    )?;

    chart
        .draw_series(LineSeries::new([(0.0, 0.0), (chord, 0.0)], &BLACK))?
        .label("chord line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;

    Ok(())
}

/// Hands the saved plot to the platform image viewer. The viewer runs
/// detached, so failures past process spawn are not reported.
pub fn show_plot(path: &Path) -> std::io::Result<()> {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };

    Command::new(opener).arg(path).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "needs a system font for the captions and axis labels"]
    fn test_plot_writes_png() {
        let points = vec![
            Point2::new(1.0, 0.001),
            Point2::new(0.5, 0.08),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.08),
            Point2::new(1.0, -0.001),
        ];
        let path = std::env::temp_dir().join("airfoil_rs_plot_test.png");
        plot_contour(&points, "0012", 1.0, &path).unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_plot_rejects_empty_contour() {
        let path = std::env::temp_dir().join("airfoil_rs_plot_empty_test.png");
        assert!(plot_contour(&[], "0012", 1.0, &path).is_err());
    }
}
