//! Spring-mass system variants and their equations of motion.

use felspring_math::{Fixed, Result, div_fp, mul_fp, to_fixed};
use serde::{Deserialize, Serialize};

/// A spring-mass system. All parameters are fixed-point scaled integers.
///
/// The three variants share the RK4 stepping skeleton and differ only in
/// the acceleration function. Damping coefficients default to zero in the
/// convenience constructors; the reference trajectories are undamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Oscillator {
    /// Single mass on one spring with restoring force toward the origin.
    Simple {
        /// Spring constant.
        k: Fixed,
        /// Mass.
        m: Fixed,
        /// Velocity-proportional damping coefficient.
        damping: Fixed,
    },
    /// Single mass tied to the four corners of the `[0, width]²` box.
    Planar {
        /// Spring constant, shared by all four anchor springs.
        k: Fixed,
        /// Mass.
        m: Fixed,
        /// Velocity-proportional damping coefficient.
        damping: Fixed,
        /// Side length of the anchor box.
        width: Fixed,
    },
    /// Two masses between walls at `0` and `width`, coupled by three
    /// springs in series. The only variant where one mass's acceleration
    /// depends on the other's position.
    Coupled {
        /// Left wall to mass 1.
        k1: Fixed,
        /// Mass 1 to mass 2.
        k2: Fixed,
        /// Mass 2 to right wall.
        k3: Fixed,
        /// First mass.
        m1: Fixed,
        /// Second mass.
        m2: Fixed,
        /// Damping on mass 1.
        damping1: Fixed,
        /// Damping on mass 2.
        damping2: Fixed,
        /// Wall separation.
        width: Fixed,
    },
}

impl Oscillator {
    /// Undamped single oscillator from real-valued constants.
    pub fn simple(k: f64, m: f64) -> Self {
        Self::Simple {
            k: to_fixed(k),
            m: to_fixed(m),
            damping: 0,
        }
    }

    /// Undamped planar oscillator in a box of the given width.
    pub fn planar(k: f64, m: f64, width: f64) -> Self {
        Self::Planar {
            k: to_fixed(k),
            m: to_fixed(m),
            damping: 0,
            width: to_fixed(width),
        }
    }

    /// Undamped coupled pair with equal spring constants.
    pub fn coupled(k: f64, m1: f64, m2: f64, width: f64) -> Self {
        Self::Coupled {
            k1: to_fixed(k),
            k2: to_fixed(k),
            k3: to_fixed(k),
            m1: to_fixed(m1),
            m2: to_fixed(m2),
            damping1: 0,
            damping2: 0,
            width: to_fixed(width),
        }
    }

    /// Number of degrees of freedom.
    pub fn dof(&self) -> usize {
        match self {
            Oscillator::Simple { .. } => 1,
            Oscillator::Planar { .. } | Oscillator::Coupled { .. } => 2,
        }
    }

    /// Acceleration per degree of freedom at the given positions and
    /// velocities. `q` and `v` must each carry [`dof`](Self::dof) entries.
    ///
    /// Fails only when a mass is configured as zero.
    pub fn acceleration(&self, q: &[Fixed], v: &[Fixed]) -> Result<Vec<Fixed>> {
        match self {
            Oscillator::Simple { k, m, damping } => {
                let f = -(mul_fp(*k, q[0]) + mul_fp(*damping, v[0]));
                Ok(vec![div_fp(f, *m)?])
            }
            Oscillator::Planar {
                k,
                m,
                damping,
                width,
            } => {
                let w = *width;
                let anchors: [(Fixed, Fixed); 4] = [(0, 0), (w, 0), (w, w), (0, w)];
                let mut sx = 0;
                let mut sy = 0;
                for (ax, ay) in anchors {
                    sx += q[0] - ax;
                    sy += q[1] - ay;
                }
                let fx = -(mul_fp(*k, sx) + mul_fp(*damping, v[0]));
                let fy = -(mul_fp(*k, sy) + mul_fp(*damping, v[1]));
                Ok(vec![div_fp(fx, *m)?, div_fp(fy, *m)?])
            }
            Oscillator::Coupled {
                k1,
                k2,
                k3,
                m1,
                m2,
                damping1,
                damping2,
                width,
            } => {
                let stretch = q[1] - q[0];
                let f1 = -mul_fp(*k1, q[0]) + mul_fp(*k2, stretch) - mul_fp(*damping1, v[0]);
                let f2 =
                    -mul_fp(*k2, stretch) - mul_fp(*k3, q[1] - *width) - mul_fp(*damping2, v[1]);
                Ok(vec![div_fp(f1, *m1)?, div_fp(f2, *m2)?])
            }
        }
    }
}
