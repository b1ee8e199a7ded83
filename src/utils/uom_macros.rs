#![warn(missing_docs)]
//! uom macros for creating angles in degree or radian
/// helper macro creating a single [`Angle`](uom::si::f64::Angle) or a `Vec` of angles in the given unit
#[macro_export]
macro_rules! uom_angle_creator {
    ($unit:ident, $val:expr) => {
        uom::si::f64::Angle::new::<$unit>($val)
    };
    ($unit:ident, $( $x:expr ),+) => {
        {
            use std::vec::Vec;
            let mut angles = Vec::new();
            $(
                angles.push(uom::si::f64::Angle::new::<$unit>($x));
            )+
            angles
        }
    };
}

///macro to create an angle in degree
#[macro_export]
macro_rules! degree {
    ($( $x:expr ),+) =>{{
        use uom::si::angle::degree;
        $crate::uom_angle_creator![degree, $( $x ),+]
    }};
}

///macro to create an angle in radian
#[macro_export]
macro_rules! radian {
    ($( $x:expr ),+) =>{{
        use uom::si::angle::radian;
        $crate::uom_angle_creator![radian, $( $x ),+]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use uom::si::angle::{degree, radian};

    #[test]
    fn degree_test() {
        let angle = degree!(180.0);
        assert_relative_eq!(angle.get::<radian>(), PI);
    }
    #[test]
    fn radian_test() {
        let angle = radian!(PI / 2.0);
        assert_relative_eq!(angle.get::<degree>(), 90.0);
    }
    #[test]
    fn angle_list() {
        let angles = degree!(45.0, 60.0, 90.0);
        assert_eq!(angles.len(), 3);
        assert_relative_eq!(angles[0].get::<radian>(), PI / 4.0);
        assert_relative_eq!(angles[1].get::<radian>(), PI / 3.0);
        assert_relative_eq!(angles[2].get::<radian>(), PI / 2.0);
    }
}
