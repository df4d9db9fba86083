use ncollide2d::na::Point2;

pub mod generate;

/// A single chordwise station of the airfoil: the camber line point and the
/// upper and lower surface points obtained by offsetting the thickness
/// perpendicular to the camber line.
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// The sampled airfoil section. The camber, upper, and lower sequences are
/// index-aligned and run from the leading edge (x=0) to the trailing edge.
pub struct Airfoil {
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// The number of stations per surface.
    pub fn station_count(&self) -> usize {
        self.upper.len()
    }

    /// Flattens the section into a single ordered contour which starts at
    /// the trailing edge, runs forward along the upper surface to the
    /// leading edge, then back along the lower surface to the trailing
    /// edge. The shared leading edge point appears once, so a section with
    /// n stations yields 2n-1 contour points. The thickness polynomial
    /// leaves a small open gap at the trailing edge, which keeps the first
    /// and last points distinct but adjacent.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().copied().collect();
        result.extend(self.lower.iter().skip(1));
        result
    }
}
