//! Minimum control and unstick speeds (kt)
//!
//! All floors are keyed by pressure altitude (ft); VMU also by takeoff
//! weight (kg).

use crate::configuration::ByConfiguration;
use crate::lookup::{LookupTable, VectorLookupTable2};

/// VMCG floor of V1
pub const VMCG_V1: LookupTable = LookupTable::new(&[
    (-2_000.0, 110.0),
    (0.0, 108.0),
    (2_000.0, 106.0),
    (4_000.0, 104.0),
    (6_000.0, 101.0),
    (8_000.0, 98.0),
    (10_000.0, 95.0),
]);

/// VMCG floor of VR
pub const VMCG_VR: LookupTable = LookupTable::new(&[
    (-2_000.0, 113.0),
    (0.0, 111.0),
    (2_000.0, 109.0),
    (4_000.0, 107.0),
    (6_000.0, 104.0),
    (8_000.0, 101.0),
    (10_000.0, 98.0),
]);

/// VMCA floor of V2
pub const VMCA_V2: ByConfiguration<LookupTable> = ByConfiguration {
    conf1: LookupTable::new(&[
        (-2_000.0, 119.0),
        (0.0, 117.0),
        (2_000.0, 115.0),
        (4_000.0, 113.0),
        (6_000.0, 111.0),
        (8_000.0, 109.0),
        (10_000.0, 107.0),
    ]),
    conf2: LookupTable::new(&[
        (-2_000.0, 118.0),
        (0.0, 116.0),
        (2_000.0, 114.0),
        (4_000.0, 112.0),
        (6_000.0, 110.0),
        (8_000.0, 108.0),
        (10_000.0, 106.0),
    ]),
    conf3: LookupTable::new(&[
        (-2_000.0, 117.0),
        (0.0, 115.0),
        (2_000.0, 113.0),
        (4_000.0, 111.0),
        (6_000.0, 109.0),
        (8_000.0, 107.0),
        (10_000.0, 105.0),
    ]),
};

/// VMU floor of V2
pub const VMU_V2: ByConfiguration<VectorLookupTable2<1>> = ByConfiguration {
    conf1: VectorLookupTable2::new(&[
        (
            -2_000.0,
            &[(40_000.0, [109.0]), (50_000.0, [118.0]), (60_000.0, [127.0]), (70_000.0, [136.0]), (80_000.0, [145.0])],
        ),
        (
            0.0,
            &[(40_000.0, [110.0]), (50_000.0, [119.0]), (60_000.0, [128.0]), (70_000.0, [137.0]), (80_000.0, [146.0])],
        ),
        (
            4_000.0,
            &[(40_000.0, [112.5]), (50_000.0, [121.5]), (60_000.0, [130.5]), (70_000.0, [139.5]), (80_000.0, [148.5])],
        ),
        (
            8_000.0,
            &[(40_000.0, [115.0]), (50_000.0, [124.0]), (60_000.0, [133.0]), (70_000.0, [142.0]), (80_000.0, [151.0])],
        ),
        (
            10_000.0,
            &[(40_000.0, [116.5]), (50_000.0, [125.5]), (60_000.0, [134.5]), (70_000.0, [143.5]), (80_000.0, [152.5])],
        ),
    ]),
    conf2: VectorLookupTable2::new(&[
        (
            -2_000.0,
            &[(40_000.0, [107.0]), (50_000.0, [116.0]), (60_000.0, [125.0]), (70_000.0, [134.0]), (80_000.0, [143.0])],
        ),
        (
            0.0,
            &[(40_000.0, [108.0]), (50_000.0, [117.0]), (60_000.0, [126.0]), (70_000.0, [135.0]), (80_000.0, [144.0])],
        ),
        (
            4_000.0,
            &[(40_000.0, [110.5]), (50_000.0, [119.5]), (60_000.0, [128.5]), (70_000.0, [137.5]), (80_000.0, [146.5])],
        ),
        (
            8_000.0,
            &[(40_000.0, [113.0]), (50_000.0, [122.0]), (60_000.0, [131.0]), (70_000.0, [140.0]), (80_000.0, [149.0])],
        ),
        (
            10_000.0,
            &[(40_000.0, [114.5]), (50_000.0, [123.5]), (60_000.0, [132.5]), (70_000.0, [141.5]), (80_000.0, [150.5])],
        ),
    ]),
    conf3: VectorLookupTable2::new(&[
        (
            -2_000.0,
            &[(40_000.0, [105.0]), (50_000.0, [114.0]), (60_000.0, [123.0]), (70_000.0, [132.0]), (80_000.0, [141.0])],
        ),
        (
            0.0,
            &[(40_000.0, [106.0]), (50_000.0, [115.0]), (60_000.0, [124.0]), (70_000.0, [133.0]), (80_000.0, [142.0])],
        ),
        (
            4_000.0,
            &[(40_000.0, [108.5]), (50_000.0, [117.5]), (60_000.0, [126.5]), (70_000.0, [135.5]), (80_000.0, [144.5])],
        ),
        (
            8_000.0,
            &[(40_000.0, [111.0]), (50_000.0, [120.0]), (60_000.0, [129.0]), (70_000.0, [138.0]), (80_000.0, [147.0])],
        ),
        (
            10_000.0,
            &[(40_000.0, [112.5]), (50_000.0, [121.5]), (60_000.0, [130.5]), (70_000.0, [139.5]), (80_000.0, [148.5])],
        ),
    ]),
};
