use crate::geometry::embed::Axis;
use crate::serialize::Point3f64;
use ncollide2d::na::Point3;
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the embedded contour as plain delimited text, one `x y z` row per
/// point with six decimal places, no header.
pub fn write_txt(path: &Path, points: &[Point3<f64>]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for p in points.iter() {
        writeln!(file, "{:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    Ok(())
}

#[derive(Serialize)]
pub struct ContourPoint(#[serde(with = "Point3f64")] pub Point3<f64>);

/// The embedded contour together with the inputs that produced it, for the
/// optional JSON export.
#[derive(Serialize)]
pub struct AirfoilRecord {
    pub code: String,
    pub chord: f64,
    pub normal: Axis,
    pub points: Vec<ContourPoint>,
}

impl AirfoilRecord {
    pub fn new(code: &str, chord: f64, normal: Axis, points: &[Point3<f64>]) -> AirfoilRecord {
        AirfoilRecord {
            code: code.to_string(),
            chord,
            normal,
            points: points.iter().map(|p| ContourPoint(*p)).collect(),
        }
    }
}

pub fn write_json(path: &Path, record: &AirfoilRecord) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, record)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 0.001, 0.0),
            Point3::new(0.5, 0.08, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_write_txt_rows() {
        let path = std::env::temp_dir().join("airfoil_rs_export_test.txt");
        write_txt(&path, &sample_points()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = content.lines().collect();
        assert_eq!(3, rows.len());
        for row in rows.iter() {
            assert_eq!(3, row.split_whitespace().count());
        }
        assert_eq!("1.000000 0.001000 0.000000", rows[0]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_json_round_trip() {
        let path = std::env::temp_dir().join("airfoil_rs_export_test.json");
        let record = AirfoilRecord::new("2412", 1.0, Axis::Z, &sample_points());
        write_json(&path, &record).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!("2412", value["code"]);
        assert_eq!("Z", value["normal"]);
        assert_eq!(3, value["points"].as_array().unwrap().len());
        assert_eq!(0.08, value["points"][1]["y"]);

        std::fs::remove_file(&path).unwrap();
    }
}
