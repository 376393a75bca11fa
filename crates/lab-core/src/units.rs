// lab-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, Length as UomLength, Time as UomTime,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type Length = UomLength;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn in_degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}

#[inline]
pub fn in_radians(a: Angle) -> f64 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

#[inline]
pub fn in_meters(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

#[inline]
pub fn in_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[inline]
pub fn in_mps(v: Velocity) -> f64 {
    use uom::si::velocity::meter_per_second;
    v.get::<meter_per_second>()
}

pub mod constants {
    use super::*;

    /// Gravitational acceleration used by the lab's kinematics.
    pub const LAB_G_MPS2: f64 = 9.8;

    #[inline]
    pub fn lab_g() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(LAB_G_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _a = deg(45.0);
        let _v = mps(10.0);
        let _l = m(2.0);
        let _t = s(0.1);
        let _g = constants::lab_g();
    }

    #[test]
    fn degree_round_trip() {
        assert!((in_degrees(deg(30.0)) - 30.0).abs() < 1e-12);
        assert!((deg(180.0).value - core::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn velocity_times_time_is_length() {
        let d: Length = mps(3.0) * s(2.0);
        assert!((in_meters(d) - 6.0).abs() < 1e-12);
    }
}
