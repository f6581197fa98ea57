//! Coefficient record types
//!
//! The chart data is a set of small polynomials. Each record here owns one
//! family of coefficients and evaluates its own polynomial, so the
//! calculation modules never index raw coefficient arrays.
//!
//! Units follow the data: weight deltas are produced in tonnes and scaled to
//! kilograms by the caller, speed terms are in knots with the weight taken in
//! tonnes.

use crate::lookup::LookupTable;

/// `slope x x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Gradient
    pub slope: f64,
    /// Value at zero
    pub intercept: f64,
}

impl Line {
    /// Line through `(0, intercept)` with gradient `slope`
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Value at `x`
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Lower envelope of two lines, never above zero
///
/// ```text
/// adjustment(x) = min(first(x), second(x), 0)
/// ```
///
/// Used for every wet runway correction: a wet runway never improves on the
/// dry figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLineMinimum {
    /// First line
    pub first: Line,
    /// Second line
    pub second: Line,
}

impl TwoLineMinimum {
    /// Pair of lines
    pub const fn new(first: Line, second: Line) -> Self {
        Self { first, second }
    }

    /// Build from the `[a1, b1, a2, b2]` layout of the speed delta tables
    pub const fn from_components(c: [f64; 4]) -> Self {
        Self::new(Line::new(c[0], c[1]), Line::new(c[2], c[3]))
    }

    /// Adjustment at `x`, clamped to be non-positive
    pub fn at(&self, x: f64) -> f64 {
        self.first.at(x).min(self.second.at(x)).min(0.0)
    }
}

/// Base weight of a limiting factor as a function of adjusted TORA
#[derive(Debug, Clone, Copy)]
pub enum BaseWeight {
    /// Read from a runway length chart (kg)
    Table(LookupTable),
    /// `slope x TORA + intercept` (kg/m, kg)
    Linear(Line),
}

impl BaseWeight {
    /// Base weight for `adjusted_tora` (kg)
    pub fn at(&self, adjusted_tora: f64) -> f64 {
        match self {
            Self::Table(table) => table.get(adjusted_tora),
            Self::Linear(line) => line.at(adjusted_tora),
        }
    }
}

/// Quadratic pressure altitude deduction (t/ft, t/ft²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeCoefficients {
    /// Linear term
    pub linear: f64,
    /// Quadratic term
    pub quadratic: f64,
}

impl AltitudeCoefficients {
    /// Deduction at `pressure_alt` (t)
    pub fn at(&self, pressure_alt: f64) -> f64 {
        self.linear * pressure_alt + self.quadratic * pressure_alt * pressure_alt
    }
}

/// Weight lost per degree in one temperature segment (t/°C)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureGradient {
    /// Runway length term (t/°C/m)
    pub length: f64,
    /// Pressure altitude term (t/°C/ft)
    pub altitude: f64,
    /// Constant term (t/°C)
    pub constant: f64,
}

impl TemperatureGradient {
    /// Gradient components
    pub const fn new(length: f64, altitude: f64, constant: f64) -> Self {
        Self { length, altitude, constant }
    }

    /// Gradient for `adjusted_tora` and `pressure_alt` (t/°C)
    pub fn at(&self, adjusted_tora: f64, pressure_alt: f64) -> f64 {
        self.length * adjusted_tora + self.altitude * pressure_alt + self.constant
    }
}

/// Three segment temperature correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureCoefficients {
    /// Gradient at and below Tref (t/°C)
    pub below_tref: f64,
    /// Gradient between Tref and Tmax
    pub above_tref: TemperatureGradient,
    /// Gradient between Tmax and Tflexmax
    pub above_tmax: TemperatureGradient,
}

/// Wind gradients per temperature segment (t/kt as a line over TORA)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSegments {
    /// Gradient at Tref, applied at and below Tref
    pub below_tref: Line,
    /// Additional gradient per °C between Tref and Tmax
    pub above_tref: Line,
    /// Additional gradient per °C between Tmax and Tflexmax
    pub above_tmax: Line,
}

/// Headwind and tailwind use disjoint coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindCoefficients {
    /// Coefficients for zero or positive wind
    pub headwind: WindSegments,
    /// Coefficients for negative wind
    pub tailwind: WindSegments,
}

impl WindCoefficients {
    /// Segment set for the sign of `wind`
    pub fn for_wind(&self, wind: f64) -> &WindSegments {
        if wind >= 0.0 {
            &self.headwind
        } else {
            &self.tailwind
        }
    }
}

/// Everything one limiting factor needs in one configuration
#[derive(Debug, Clone, Copy)]
pub struct LimitCoefficients {
    /// Base weight
    pub base: BaseWeight,
    /// Slope deduction factor (t/m/%)
    pub slope: f64,
    /// Pressure altitude deduction
    pub altitude: AltitudeCoefficients,
    /// Temperature deduction
    pub temperature: TemperatureCoefficients,
    /// Wind deduction
    pub wind: WindCoefficients,
}

/// Regression term `q x (k0 + k1 x w) + k2 x q²`
///
/// `w` is the takeoff weight in tonnes and `q` the environmental quantity the
/// term belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTerm {
    /// Linear coefficient
    pub k0: f64,
    /// Weight interaction coefficient
    pub k1: f64,
    /// Quadratic coefficient
    pub k2: f64,
}

impl SpeedTerm {
    /// Term coefficients
    pub const fn new(k0: f64, k1: f64, k2: f64) -> Self {
        Self { k0, k1, k2 }
    }

    /// Term value (kt)
    #[inline]
    pub fn at(&self, weight_t: f64, q: f64) -> f64 {
        q * (self.k0 + self.k1 * weight_t) + self.k2 * q * q
    }
}

/// One speed regression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRegression {
    /// Base speed over weight in tonnes
    pub base: Line,
    /// Adjusted TORA term (m)
    pub runway: SpeedTerm,
    /// Pressure altitude term (ft)
    pub altitude: SpeedTerm,
    /// Slope term (%)
    pub slope: SpeedTerm,
    /// Headwind term (kt)
    pub headwind: SpeedTerm,
    /// Tailwind term (kt, negative)
    pub tailwind: SpeedTerm,
}

/// Speeds of runway or VMCG limited takeoffs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunwayVmcgSpeeds {
    /// V1 regression
    pub v1: SpeedRegression,
    /// VR regression
    pub vr: SpeedRegression,
    /// V2 regression
    pub v2: SpeedRegression,
}

/// Which of the two climb speed tables applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedTable {
    /// Low speed table
    Table1,
    /// High speed table
    Table2,
}

/// One value per climb speed table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByTable<T> {
    /// Table 1 value
    pub table1: T,
    /// Table 2 value
    pub table2: T,
}

impl<T> ByTable<T> {
    /// Value for `table`
    pub const fn get(&self, table: SpeedTable) -> &T {
        match table {
            SpeedTable::Table1 => &self.table1,
            SpeedTable::Table2 => &self.table2,
        }
    }
}

/// Speeds of second segment or brake energy limited takeoffs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbSpeeds {
    /// V1 regressions
    pub v1: ByTable<SpeedRegression>,
    /// VR regressions
    pub vr: ByTable<SpeedRegression>,
    /// V2 regressions
    pub v2: ByTable<SpeedRegression>,
    /// Table 2 applies when the no-wind table 1 V2 exceeds this line over TORA
    pub table2_threshold: Line,
}

/// Speed regressions of one configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCoefficients {
    /// Runway/VMCG limited family
    pub runway_vmcg: RunwayVmcgSpeeds,
    /// Second segment/brake energy limited family
    pub climb: ClimbSpeeds,
}

/// Wet runway regime relative to T-VMCG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VmcgRegime {
    /// OAT at or below T-VMCG: the wet takeoff is distance limited
    Below,
    /// OAT above T-VMCG: the wet takeoff is VMCG limited
    Above,
}

impl VmcgRegime {
    /// Regime of `oat` against the threshold `t_vmcg`
    pub fn of(oat: f64, t_vmcg: f64) -> Self {
        if oat > t_vmcg {
            Self::Above
        } else {
            Self::Below
        }
    }
}

/// One value per wet runway regime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByRegime<T> {
    /// Value at or below T-VMCG
    pub below: T,
    /// Value above T-VMCG
    pub above: T,
}

impl<T> ByRegime<T> {
    /// Value for `regime`
    pub const fn get(&self, regime: VmcgRegime) -> &T {
        match regime {
            VmcgRegime::Below => &self.below,
            VmcgRegime::Above => &self.above,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_line_minimum_never_positive() {
        let adjustment = TwoLineMinimum::new(Line::new(1.0, -100.0), Line::new(0.5, -20.0));
        assert_eq!(adjustment.at(0.0), -100.0);
        assert_eq!(adjustment.at(100.0), 0.0);
        assert_eq!(adjustment.at(1_000.0), 0.0);
        assert_eq!(adjustment.at(60.0), -40.0);
    }

    #[test]
    fn two_line_minimum_components() {
        let adjustment = TwoLineMinimum::from_components([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(adjustment.first, Line::new(1.0, 2.0));
        assert_eq!(adjustment.second, Line::new(3.0, 4.0));
    }

    #[test]
    fn speed_term_polynomial() {
        let term = SpeedTerm::new(2.0, 0.5, 0.1);
        // 10 * (2 + 0.5 * 4) + 0.1 * 100
        assert!((term.at(4.0, 10.0) - 50.0).abs() < 1e-12);
        assert_eq!(term.at(60.0, 0.0), 0.0);
    }

    #[test]
    fn base_weight_variants() {
        const TABLE: LookupTable = LookupTable::new(&[(1_000.0, 40_000.0), (2_000.0, 60_000.0)]);
        assert_eq!(BaseWeight::Table(TABLE).at(1_500.0), 50_000.0);
        assert_eq!(BaseWeight::Linear(Line::new(2.0, 70_000.0)).at(1_500.0), 73_000.0);
    }

    #[test]
    fn regime_threshold_is_exclusive() {
        assert_eq!(VmcgRegime::of(30.0, 30.0), VmcgRegime::Below);
        assert_eq!(VmcgRegime::of(30.5, 30.0), VmcgRegime::Above);
    }

    #[test]
    fn wind_sign_selects_set() {
        let segments = |c| WindSegments {
            below_tref: Line::new(0.0, c),
            above_tref: Line::new(0.0, 0.0),
            above_tmax: Line::new(0.0, 0.0),
        };
        let wind = WindCoefficients { headwind: segments(1.0), tailwind: segments(-1.0) };
        assert_eq!(wind.for_wind(0.0).below_tref.intercept, 1.0);
        assert_eq!(wind.for_wind(-0.1).below_tref.intercept, -1.0);
    }
}
