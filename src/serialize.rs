use ncollide2d::na::{Point2, Point3};
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
#[serde(remote = "Point3<f64>")]
pub struct Point3f64 {
    x: f64,
    y: f64,
    z: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Wrapped2(#[serde(with = "Point2f64")] Point2<f64>);

    #[derive(Serialize)]
    struct Wrapped3(#[serde(with = "Point3f64")] Point3<f64>);

    #[test]
    fn test_point_remotes_serialize_by_field() {
        let p2 = serde_json::to_value(Wrapped2(Point2::new(1.0, -0.5))).unwrap();
        assert_eq!(1.0, p2["x"]);
        assert_eq!(-0.5, p2["y"]);

        let p3 = serde_json::to_value(Wrapped3(Point3::new(0.25, 0.0, 2.0))).unwrap();
        assert_eq!(0.25, p3["x"]);
        assert_eq!(2.0, p3["z"]);
    }
}
