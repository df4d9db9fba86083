use crate::airfoil::{Airfoil, CamberStation};
use crate::errors::AirfoilError;
use ncollide2d::na::{Point2, Vector2};
use ncollide2d::query::Ray;
use std::f64::consts::PI;

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line,
/// its slope, and the airfoil thickness at fractions of the chord. This provides the information
/// necessary for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the slope dy/dx of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the full thickness of the airfoil with respect to the camber line at a fraction from
    /// 0.0 to 1.0
    fn thickness(&self, x: f64) -> f64;

    /// Computes the camber point at the given chord fraction together with the upper and lower
    /// surface points, which sit at half the local thickness along the camber line normal
    fn station_at(&self, x: f64) -> CamberStation {
        let clx = self.camber_line(x);
        let theta = self.camber_slope(x).atan();
        let n = Ray::new(clx, Vector2::new(-theta.sin(), theta.cos()));
        let t = self.thickness(x);

        CamberStation::new(clx, n.point_at(t / 2.0), n.point_at(-t / 2.0))
    }

    /// Samples the airfoil at `num_points` cosine spaced stations per surface, clustering points
    /// at the leading and trailing edges where the curvature is highest
    fn generate(&self, num_points: usize) -> Result<Airfoil, AirfoilError> {
        if num_points < 2 {
            return Err(AirfoilError::InvalidParameter(format!(
                "at least 2 stations per surface are required, got {}",
                num_points
            )));
        }

        let stations: Vec<CamberStation> = cosine_spacing(num_points)
            .iter()
            .map(|&x| self.station_at(x))
            .collect();

        Ok(Airfoil::from_stations(&stations))
    }
}

/// Returns `n` chordwise fractions in [0, 1] spaced as x = (1 - cos(beta)) / 2 with beta linear
/// in [0, pi], so stations cluster near both edges. Requires n >= 2.
pub fn cosine_spacing(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let beta = PI * i as f64 / (n - 1) as f64;
            0.5 * (1.0 - beta.cos())
        })
        .collect()
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber, P is
/// the location of the maximum camber, and TT is the maximum thickness of the airfoil as a
/// fraction of the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord
/// and a max thickness which is 12% of the chord length.
pub struct Naca4Digit {
    t: f64,
    chord_len: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, chord_len: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            chord_len,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    /// Decodes a 4 digit code such as "2412" or "0012" into a generator. The first digit is the
    /// maximum camber in percent of chord, the second is the location of the maximum camber in
    /// tenths of chord, and the last two are the maximum thickness in percent of chord.
    ///
    /// Rejects codes which are not exactly four decimal digits, codes whose thickness digits are
    /// zero (a degenerate profile), and non-positive chord lengths.
    pub fn from_code(code: &str, chord_len: f64) -> Result<Naca4Digit, AirfoilError> {
        let trimmed = code.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(AirfoilError::InvalidCode(format!(
                "expected exactly 4 digits, got '{}'",
                code
            )));
        }

        // The all-digits check above guarantees these conversions
        let digits: Vec<f64> = trimmed
            .chars()
            .map(|c| c.to_digit(10).unwrap() as f64)
            .collect();

        let m = digits[0] / 100.0;
        let p = digits[1] / 10.0;
        let t = (digits[2] * 10.0 + digits[3]) / 100.0;

        if t <= 0.0 {
            return Err(AirfoilError::InvalidCode(format!(
                "'{}' has zero thickness",
                trimmed
            )));
        }

        if chord_len <= 0.0 {
            return Err(AirfoilError::InvalidParameter(format!(
                "chord length must be positive, got {}",
                chord_len
            )));
        }

        Ok(Naca4Digit::new(t, chord_len, m, p))
    }

    /// The maximum camber as a fraction of the chord
    pub fn max_camber(&self) -> f64 {
        self.m
    }

    /// The location of the maximum camber as a fraction of the chord
    pub fn max_camber_position(&self) -> f64 {
        self.p
    }

    /// The maximum thickness as a fraction of the chord
    pub fn max_thickness(&self) -> f64 {
        self.t
    }

    pub fn chord_len(&self) -> f64 {
        self.chord_len
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> Point2<f64> {
        let y = if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (self.m / self.p.powf(2.0)) * (2.0 * self.p * x - x.powf(2.0))
        } else {
            (self.m / (1.0 - self.p).powf(2.0))
                * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powf(2.0))
        };

        Point2::new(x * self.chord_len, y * self.chord_len)
    }

    // The slope is the same in normalized and chord-scaled coordinates
    fn camber_slope(&self, x: f64) -> f64 {
        if self.p < 1e-6 {
            0.0
        } else if x < self.p {
            (2.0 * self.m / self.p.powf(2.0)) * (self.p - x)
        } else {
            (2.0 * self.m / (1.0 - self.p).powf(2.0)) * (self.p - x)
        }
    }

    fn thickness(&self, x: f64) -> f64 {
        let half = 5.0
            * self.t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powf(2.0) + 0.2843 * x.powf(3.0)
                - 0.1015 * x.powf(4.0));
        2.0 * half * self.chord_len
    }
}
