//! Contaminated runway charts
//!
//! Per condition and configuration: a weight correction over adjusted TORA
//! (m -> kg), an MTOW chart over the corrected weight (kg -> kg) and the
//! V1/VR/V2 chart over takeoff weight (kg -> kt).

use crate::configuration::ByConfiguration;
use crate::contamination::{ContaminationProfile, ContaminationTables};
use crate::lookup::{LookupTable, VectorLookupTable};

/// 6.3 mm (1/4 in) standing water
pub static WATER_6MM: ContaminationProfile = ContaminationProfile {
    description: "6.3 mm (1/4 in) standing water",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 11_550.0),
                (2_000.0, 9_450.0),
                (2_500.0, 7_980.0),
                (3_000.0, 6_930.0),
                (3_500.0, 6_200.0),
                (4_000.0, 5_670.0),
                (4_500.0, 5_250.0),
            ]),
            mtow: LookupTable::new(&[
                (48_500.0, 52_700.0),
                (52_500.0, 56_550.0),
                (56_500.0, 60_400.0),
                (60_500.0, 64_250.0),
                (64_500.0, 68_100.0),
                (68_500.0, 71_950.0),
                (72_500.0, 75_800.0),
                (76_500.0, 79_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [101.0, 114.0, 121.0]),
                (50_000.0, [109.0, 122.0, 128.0]),
                (58_000.0, [117.0, 130.0, 136.0]),
                (66_000.0, [125.0, 138.0, 144.0]),
                (74_000.0, [133.0, 146.0, 151.0]),
                (82_000.0, [141.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 11_000.0),
                (2_000.0, 9_000.0),
                (2_500.0, 7_600.0),
                (3_000.0, 6_600.0),
                (3_500.0, 5_900.0),
                (4_000.0, 5_400.0),
                (4_500.0, 5_000.0),
            ]),
            mtow: LookupTable::new(&[
                (48_000.0, 52_200.0),
                (52_000.0, 56_050.0),
                (56_000.0, 59_900.0),
                (60_000.0, 63_750.0),
                (64_000.0, 67_600.0),
                (68_000.0, 71_450.0),
                (72_000.0, 75_300.0),
                (76_000.0, 79_150.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [98.0, 111.0, 118.0]),
                (50_000.0, [106.0, 119.0, 126.0]),
                (58_000.0, [114.0, 127.0, 133.0]),
                (66_000.0, [122.0, 135.0, 141.0]),
                (74_000.0, [130.0, 143.0, 148.0]),
                (82_000.0, [138.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 10_560.0),
                (2_000.0, 8_640.0),
                (2_500.0, 7_300.0),
                (3_000.0, 6_340.0),
                (3_500.0, 5_660.0),
                (4_000.0, 5_180.0),
                (4_500.0, 4_800.0),
            ]),
            mtow: LookupTable::new(&[
                (47_500.0, 51_700.0),
                (51_500.0, 55_550.0),
                (55_500.0, 59_400.0),
                (59_500.0, 63_250.0),
                (63_500.0, 67_100.0),
                (67_500.0, 70_950.0),
                (71_500.0, 74_800.0),
                (75_500.0, 78_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [95.0, 108.0, 115.0]),
                (50_000.0, [103.0, 116.0, 122.0]),
                (58_000.0, [111.0, 124.0, 130.0]),
                (66_000.0, [119.0, 132.0, 138.0]),
                (74_000.0, [127.0, 140.0, 145.0]),
                (82_000.0, [135.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 12.7 mm (1/2 in) standing water
pub static WATER_13MM: ContaminationProfile = ContaminationProfile {
    description: "12.7 mm (1/2 in) standing water",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 15_590.0),
                (2_000.0, 12_760.0),
                (2_500.0, 10_770.0),
                (3_000.0, 9_360.0),
                (3_500.0, 8_360.0),
                (4_000.0, 7_650.0),
                (4_500.0, 7_090.0),
            ]),
            mtow: LookupTable::new(&[
                (50_500.0, 54_100.0),
                (54_500.0, 57_950.0),
                (58_500.0, 61_800.0),
                (62_500.0, 65_650.0),
                (66_500.0, 69_500.0),
                (70_500.0, 73_350.0),
                (74_500.0, 77_200.0),
                (78_500.0, 81_050.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [98.0, 114.0, 121.0]),
                (50_000.0, [106.0, 122.0, 128.0]),
                (58_000.0, [114.0, 130.0, 136.0]),
                (66_000.0, [122.0, 138.0, 144.0]),
                (74_000.0, [130.0, 146.0, 151.0]),
                (82_000.0, [138.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 14_850.0),
                (2_000.0, 12_150.0),
                (2_500.0, 10_260.0),
                (3_000.0, 8_910.0),
                (3_500.0, 7_970.0),
                (4_000.0, 7_290.0),
                (4_500.0, 6_750.0),
            ]),
            mtow: LookupTable::new(&[
                (50_000.0, 53_600.0),
                (54_000.0, 57_450.0),
                (58_000.0, 61_300.0),
                (62_000.0, 65_150.0),
                (66_000.0, 69_000.0),
                (70_000.0, 72_850.0),
                (74_000.0, 76_700.0),
                (78_000.0, 80_550.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [95.0, 111.0, 118.0]),
                (50_000.0, [103.0, 119.0, 126.0]),
                (58_000.0, [111.0, 127.0, 133.0]),
                (66_000.0, [119.0, 135.0, 141.0]),
                (74_000.0, [127.0, 143.0, 148.0]),
                (82_000.0, [135.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 14_260.0),
                (2_000.0, 11_660.0),
                (2_500.0, 9_850.0),
                (3_000.0, 8_550.0),
                (3_500.0, 7_650.0),
                (4_000.0, 7_000.0),
                (4_500.0, 6_480.0),
            ]),
            mtow: LookupTable::new(&[
                (49_500.0, 53_100.0),
                (53_500.0, 56_950.0),
                (57_500.0, 60_800.0),
                (61_500.0, 64_650.0),
                (65_500.0, 68_500.0),
                (69_500.0, 72_350.0),
                (73_500.0, 76_200.0),
                (77_500.0, 80_050.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [92.0, 108.0, 115.0]),
                (50_000.0, [100.0, 116.0, 122.0]),
                (58_000.0, [108.0, 124.0, 130.0]),
                (66_000.0, [116.0, 132.0, 138.0]),
                (74_000.0, [124.0, 140.0, 145.0]),
                (82_000.0, [132.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 6.3 mm (1/4 in) slush
pub static SLUSH_6MM: ContaminationProfile = ContaminationProfile {
    description: "6.3 mm (1/4 in) slush",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 12_710.0),
                (2_000.0, 10_400.0),
                (2_500.0, 8_780.0),
                (3_000.0, 7_620.0),
                (3_500.0, 6_810.0),
                (4_000.0, 6_240.0),
                (4_500.0, 5_780.0),
            ]),
            mtow: LookupTable::new(&[
                (49_000.0, 53_000.0),
                (53_000.0, 56_850.0),
                (57_000.0, 60_700.0),
                (61_000.0, 64_550.0),
                (65_000.0, 68_400.0),
                (69_000.0, 72_250.0),
                (73_000.0, 76_100.0),
                (77_000.0, 79_950.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [100.0, 114.0, 121.0]),
                (50_000.0, [108.0, 122.0, 128.0]),
                (58_000.0, [116.0, 130.0, 136.0]),
                (66_000.0, [124.0, 138.0, 144.0]),
                (74_000.0, [132.0, 146.0, 151.0]),
                (82_000.0, [140.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 12_100.0),
                (2_000.0, 9_900.0),
                (2_500.0, 8_360.0),
                (3_000.0, 7_260.0),
                (3_500.0, 6_490.0),
                (4_000.0, 5_940.0),
                (4_500.0, 5_500.0),
            ]),
            mtow: LookupTable::new(&[
                (48_500.0, 52_500.0),
                (52_500.0, 56_350.0),
                (56_500.0, 60_200.0),
                (60_500.0, 64_050.0),
                (64_500.0, 67_900.0),
                (68_500.0, 71_750.0),
                (72_500.0, 75_600.0),
                (76_500.0, 79_450.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [97.0, 111.0, 118.0]),
                (50_000.0, [105.0, 119.0, 126.0]),
                (58_000.0, [113.0, 127.0, 133.0]),
                (66_000.0, [121.0, 135.0, 141.0]),
                (74_000.0, [129.0, 143.0, 148.0]),
                (82_000.0, [137.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 11_620.0),
                (2_000.0, 9_500.0),
                (2_500.0, 8_030.0),
                (3_000.0, 6_970.0),
                (3_500.0, 6_230.0),
                (4_000.0, 5_700.0),
                (4_500.0, 5_280.0),
            ]),
            mtow: LookupTable::new(&[
                (48_000.0, 52_000.0),
                (52_000.0, 55_850.0),
                (56_000.0, 59_700.0),
                (60_000.0, 63_550.0),
                (64_000.0, 67_400.0),
                (68_000.0, 71_250.0),
                (72_000.0, 75_100.0),
                (76_000.0, 78_950.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [94.0, 108.0, 115.0]),
                (50_000.0, [102.0, 116.0, 122.0]),
                (58_000.0, [110.0, 124.0, 130.0]),
                (66_000.0, [118.0, 132.0, 138.0]),
                (74_000.0, [126.0, 140.0, 145.0]),
                (82_000.0, [134.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 12.7 mm (1/2 in) slush
pub static SLUSH_13MM: ContaminationProfile = ContaminationProfile {
    description: "12.7 mm (1/2 in) slush",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 17_320.0),
                (2_000.0, 14_180.0),
                (2_500.0, 11_970.0),
                (3_000.0, 10_400.0),
                (3_500.0, 9_290.0),
                (4_000.0, 8_500.0),
                (4_500.0, 7_880.0),
            ]),
            mtow: LookupTable::new(&[
                (51_000.0, 54_400.0),
                (55_000.0, 58_250.0),
                (59_000.0, 62_100.0),
                (63_000.0, 65_950.0),
                (67_000.0, 69_800.0),
                (71_000.0, 73_650.0),
                (75_000.0, 77_500.0),
                (79_000.0, 81_350.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [97.0, 114.0, 121.0]),
                (50_000.0, [105.0, 122.0, 128.0]),
                (58_000.0, [113.0, 130.0, 136.0]),
                (66_000.0, [121.0, 138.0, 144.0]),
                (74_000.0, [129.0, 146.0, 151.0]),
                (82_000.0, [137.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 16_500.0),
                (2_000.0, 13_500.0),
                (2_500.0, 11_400.0),
                (3_000.0, 9_900.0),
                (3_500.0, 8_850.0),
                (4_000.0, 8_100.0),
                (4_500.0, 7_500.0),
            ]),
            mtow: LookupTable::new(&[
                (50_500.0, 53_900.0),
                (54_500.0, 57_750.0),
                (58_500.0, 61_600.0),
                (62_500.0, 65_450.0),
                (66_500.0, 69_300.0),
                (70_500.0, 73_150.0),
                (74_500.0, 77_000.0),
                (78_500.0, 80_850.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [94.0, 111.0, 118.0]),
                (50_000.0, [102.0, 119.0, 126.0]),
                (58_000.0, [110.0, 127.0, 133.0]),
                (66_000.0, [118.0, 135.0, 141.0]),
                (74_000.0, [126.0, 143.0, 148.0]),
                (82_000.0, [134.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 15_840.0),
                (2_000.0, 12_960.0),
                (2_500.0, 10_940.0),
                (3_000.0, 9_500.0),
                (3_500.0, 8_500.0),
                (4_000.0, 7_780.0),
                (4_500.0, 7_200.0),
            ]),
            mtow: LookupTable::new(&[
                (50_000.0, 53_400.0),
                (54_000.0, 57_250.0),
                (58_000.0, 61_100.0),
                (62_000.0, 64_950.0),
                (66_000.0, 68_800.0),
                (70_000.0, 72_650.0),
                (74_000.0, 76_500.0),
                (78_000.0, 80_350.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [91.0, 108.0, 115.0]),
                (50_000.0, [99.0, 116.0, 122.0]),
                (58_000.0, [107.0, 124.0, 130.0]),
                (66_000.0, [115.0, 132.0, 138.0]),
                (74_000.0, [123.0, 140.0, 145.0]),
                (82_000.0, [131.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// Compacted snow
pub static COMPACTED_SNOW: ContaminationProfile = ContaminationProfile {
    description: "compacted snow",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 8_080.0),
                (2_000.0, 6_620.0),
                (2_500.0, 5_590.0),
                (3_000.0, 4_850.0),
                (3_500.0, 4_340.0),
                (4_000.0, 3_970.0),
                (4_500.0, 3_680.0),
            ]),
            mtow: LookupTable::new(&[
                (46_500.0, 51_300.0),
                (50_500.0, 55_150.0),
                (54_500.0, 59_000.0),
                (58_500.0, 62_850.0),
                (62_500.0, 66_700.0),
                (66_500.0, 70_550.0),
                (70_500.0, 74_400.0),
                (74_500.0, 78_250.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [105.0, 114.0, 121.0]),
                (50_000.0, [113.0, 122.0, 128.0]),
                (58_000.0, [121.0, 130.0, 136.0]),
                (66_000.0, [129.0, 138.0, 144.0]),
                (74_000.0, [137.0, 146.0, 151.0]),
                (82_000.0, [145.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 7_700.0),
                (2_000.0, 6_300.0),
                (2_500.0, 5_320.0),
                (3_000.0, 4_620.0),
                (3_500.0, 4_130.0),
                (4_000.0, 3_780.0),
                (4_500.0, 3_500.0),
            ]),
            mtow: LookupTable::new(&[
                (46_000.0, 50_800.0),
                (50_000.0, 54_650.0),
                (54_000.0, 58_500.0),
                (58_000.0, 62_350.0),
                (62_000.0, 66_200.0),
                (66_000.0, 70_050.0),
                (70_000.0, 73_900.0),
                (74_000.0, 77_750.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [102.0, 111.0, 118.0]),
                (50_000.0, [110.0, 119.0, 126.0]),
                (58_000.0, [118.0, 127.0, 133.0]),
                (66_000.0, [126.0, 135.0, 141.0]),
                (74_000.0, [134.0, 143.0, 148.0]),
                (82_000.0, [142.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 7_390.0),
                (2_000.0, 6_050.0),
                (2_500.0, 5_110.0),
                (3_000.0, 4_440.0),
                (3_500.0, 3_960.0),
                (4_000.0, 3_630.0),
                (4_500.0, 3_360.0),
            ]),
            mtow: LookupTable::new(&[
                (45_500.0, 50_300.0),
                (49_500.0, 54_150.0),
                (53_500.0, 58_000.0),
                (57_500.0, 61_850.0),
                (61_500.0, 65_700.0),
                (65_500.0, 69_550.0),
                (69_500.0, 73_400.0),
                (73_500.0, 77_250.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [99.0, 108.0, 115.0]),
                (50_000.0, [107.0, 116.0, 122.0]),
                (58_000.0, [115.0, 124.0, 130.0]),
                (66_000.0, [123.0, 132.0, 138.0]),
                (74_000.0, [131.0, 140.0, 145.0]),
                (82_000.0, [139.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 10 mm (2/5 in) dry snow
pub static DRY_SNOW_10MM: ContaminationProfile = ContaminationProfile {
    description: "10 mm (2/5 in) dry snow",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 9_820.0),
                (2_000.0, 8_030.0),
                (2_500.0, 6_780.0),
                (3_000.0, 5_890.0),
                (3_500.0, 5_270.0),
                (4_000.0, 4_820.0),
                (4_500.0, 4_460.0),
            ]),
            mtow: LookupTable::new(&[
                (47_500.0, 52_000.0),
                (51_500.0, 55_850.0),
                (55_500.0, 59_700.0),
                (59_500.0, 63_550.0),
                (63_500.0, 67_400.0),
                (67_500.0, 71_250.0),
                (71_500.0, 75_100.0),
                (75_500.0, 78_950.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [103.0, 114.0, 121.0]),
                (50_000.0, [111.0, 122.0, 128.0]),
                (58_000.0, [119.0, 130.0, 136.0]),
                (66_000.0, [127.0, 138.0, 144.0]),
                (74_000.0, [135.0, 146.0, 151.0]),
                (82_000.0, [143.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 9_350.0),
                (2_000.0, 7_650.0),
                (2_500.0, 6_460.0),
                (3_000.0, 5_610.0),
                (3_500.0, 5_020.0),
                (4_000.0, 4_590.0),
                (4_500.0, 4_250.0),
            ]),
            mtow: LookupTable::new(&[
                (47_000.0, 51_500.0),
                (51_000.0, 55_350.0),
                (55_000.0, 59_200.0),
                (59_000.0, 63_050.0),
                (63_000.0, 66_900.0),
                (67_000.0, 70_750.0),
                (71_000.0, 74_600.0),
                (75_000.0, 78_450.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [100.0, 111.0, 118.0]),
                (50_000.0, [108.0, 119.0, 126.0]),
                (58_000.0, [116.0, 127.0, 133.0]),
                (66_000.0, [124.0, 135.0, 141.0]),
                (74_000.0, [132.0, 143.0, 148.0]),
                (82_000.0, [140.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 8_980.0),
                (2_000.0, 7_340.0),
                (2_500.0, 6_200.0),
                (3_000.0, 5_390.0),
                (3_500.0, 4_810.0),
                (4_000.0, 4_410.0),
                (4_500.0, 4_080.0),
            ]),
            mtow: LookupTable::new(&[
                (46_500.0, 51_000.0),
                (50_500.0, 54_850.0),
                (54_500.0, 58_700.0),
                (58_500.0, 62_550.0),
                (62_500.0, 66_400.0),
                (66_500.0, 70_250.0),
                (70_500.0, 74_100.0),
                (74_500.0, 77_950.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [97.0, 108.0, 115.0]),
                (50_000.0, [105.0, 116.0, 122.0]),
                (58_000.0, [113.0, 124.0, 130.0]),
                (66_000.0, [121.0, 132.0, 138.0]),
                (74_000.0, [129.0, 140.0, 145.0]),
                (82_000.0, [137.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 100 mm (4 in) dry snow
pub static DRY_SNOW_100MM: ContaminationProfile = ContaminationProfile {
    description: "100 mm (4 in) dry snow",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 18_480.0),
                (2_000.0, 15_120.0),
                (2_500.0, 12_770.0),
                (3_000.0, 11_090.0),
                (3_500.0, 9_910.0),
                (4_000.0, 9_070.0),
                (4_500.0, 8_400.0),
            ]),
            mtow: LookupTable::new(&[
                (51_500.0, 54_700.0),
                (55_500.0, 58_550.0),
                (59_500.0, 62_400.0),
                (63_500.0, 66_250.0),
                (67_500.0, 70_100.0),
                (71_500.0, 73_950.0),
                (75_500.0, 77_800.0),
                (79_500.0, 81_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [99.0, 114.0, 121.0]),
                (50_000.0, [107.0, 122.0, 128.0]),
                (58_000.0, [115.0, 130.0, 136.0]),
                (66_000.0, [123.0, 138.0, 144.0]),
                (74_000.0, [131.0, 146.0, 151.0]),
                (82_000.0, [139.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 17_600.0),
                (2_000.0, 14_400.0),
                (2_500.0, 12_160.0),
                (3_000.0, 10_560.0),
                (3_500.0, 9_440.0),
                (4_000.0, 8_640.0),
                (4_500.0, 8_000.0),
            ]),
            mtow: LookupTable::new(&[
                (51_000.0, 54_200.0),
                (55_000.0, 58_050.0),
                (59_000.0, 61_900.0),
                (63_000.0, 65_750.0),
                (67_000.0, 69_600.0),
                (71_000.0, 73_450.0),
                (75_000.0, 77_300.0),
                (79_000.0, 81_150.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [96.0, 111.0, 118.0]),
                (50_000.0, [104.0, 119.0, 126.0]),
                (58_000.0, [112.0, 127.0, 133.0]),
                (66_000.0, [120.0, 135.0, 141.0]),
                (74_000.0, [128.0, 143.0, 148.0]),
                (82_000.0, [136.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 16_900.0),
                (2_000.0, 13_820.0),
                (2_500.0, 11_670.0),
                (3_000.0, 10_140.0),
                (3_500.0, 9_060.0),
                (4_000.0, 8_290.0),
                (4_500.0, 7_680.0),
            ]),
            mtow: LookupTable::new(&[
                (50_500.0, 53_700.0),
                (54_500.0, 57_550.0),
                (58_500.0, 61_400.0),
                (62_500.0, 65_250.0),
                (66_500.0, 69_100.0),
                (70_500.0, 72_950.0),
                (74_500.0, 76_800.0),
                (78_500.0, 80_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [93.0, 108.0, 115.0]),
                (50_000.0, [101.0, 116.0, 122.0]),
                (58_000.0, [109.0, 124.0, 130.0]),
                (66_000.0, [117.0, 132.0, 138.0]),
                (74_000.0, [125.0, 140.0, 145.0]),
                (82_000.0, [133.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 5 mm (1/5 in) wet snow
pub static WET_SNOW_5MM: ContaminationProfile = ContaminationProfile {
    description: "5 mm (1/5 in) wet snow",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 10_970.0),
                (2_000.0, 8_980.0),
                (2_500.0, 7_580.0),
                (3_000.0, 6_580.0),
                (3_500.0, 5_890.0),
                (4_000.0, 5_390.0),
                (4_500.0, 4_990.0),
            ]),
            mtow: LookupTable::new(&[
                (48_000.0, 52_300.0),
                (52_000.0, 56_150.0),
                (56_000.0, 60_000.0),
                (60_000.0, 63_850.0),
                (64_000.0, 67_700.0),
                (68_000.0, 71_550.0),
                (72_000.0, 75_400.0),
                (76_000.0, 79_250.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [102.0, 114.0, 121.0]),
                (50_000.0, [110.0, 122.0, 128.0]),
                (58_000.0, [118.0, 130.0, 136.0]),
                (66_000.0, [126.0, 138.0, 144.0]),
                (74_000.0, [134.0, 146.0, 151.0]),
                (82_000.0, [142.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 10_450.0),
                (2_000.0, 8_550.0),
                (2_500.0, 7_220.0),
                (3_000.0, 6_270.0),
                (3_500.0, 5_600.0),
                (4_000.0, 5_130.0),
                (4_500.0, 4_750.0),
            ]),
            mtow: LookupTable::new(&[
                (47_500.0, 51_800.0),
                (51_500.0, 55_650.0),
                (55_500.0, 59_500.0),
                (59_500.0, 63_350.0),
                (63_500.0, 67_200.0),
                (67_500.0, 71_050.0),
                (71_500.0, 74_900.0),
                (75_500.0, 78_750.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [99.0, 111.0, 118.0]),
                (50_000.0, [107.0, 119.0, 126.0]),
                (58_000.0, [115.0, 127.0, 133.0]),
                (66_000.0, [123.0, 135.0, 141.0]),
                (74_000.0, [131.0, 143.0, 148.0]),
                (82_000.0, [139.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 10_030.0),
                (2_000.0, 8_210.0),
                (2_500.0, 6_930.0),
                (3_000.0, 6_020.0),
                (3_500.0, 5_380.0),
                (4_000.0, 4_920.0),
                (4_500.0, 4_560.0),
            ]),
            mtow: LookupTable::new(&[
                (47_000.0, 51_300.0),
                (51_000.0, 55_150.0),
                (55_000.0, 59_000.0),
                (59_000.0, 62_850.0),
                (63_000.0, 66_700.0),
                (67_000.0, 70_550.0),
                (71_000.0, 74_400.0),
                (75_000.0, 78_250.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [96.0, 108.0, 115.0]),
                (50_000.0, [104.0, 116.0, 122.0]),
                (58_000.0, [112.0, 124.0, 130.0]),
                (66_000.0, [120.0, 132.0, 138.0]),
                (74_000.0, [128.0, 140.0, 145.0]),
                (82_000.0, [136.0, 148.0, 153.0]),
            ]),
        },
    },
};

/// 15 mm (3/5 in) wet snow
pub static WET_SNOW_15MM: ContaminationProfile = ContaminationProfile {
    description: "15 mm (3/5 in) wet snow",
    tables: ByConfiguration {
        conf1: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 15_020.0),
                (2_000.0, 12_280.0),
                (2_500.0, 10_370.0),
                (3_000.0, 9_010.0),
                (3_500.0, 8_050.0),
                (4_000.0, 7_370.0),
                (4_500.0, 6_820.0),
            ]),
            mtow: LookupTable::new(&[
                (50_000.0, 53_700.0),
                (54_000.0, 57_550.0),
                (58_000.0, 61_400.0),
                (62_000.0, 65_250.0),
                (66_000.0, 69_100.0),
                (70_000.0, 72_950.0),
                (74_000.0, 76_800.0),
                (78_000.0, 80_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [99.0, 114.0, 121.0]),
                (50_000.0, [107.0, 122.0, 128.0]),
                (58_000.0, [115.0, 130.0, 136.0]),
                (66_000.0, [123.0, 138.0, 144.0]),
                (74_000.0, [131.0, 146.0, 151.0]),
                (82_000.0, [139.0, 154.0, 159.0]),
            ]),
        },
        conf2: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 14_300.0),
                (2_000.0, 11_700.0),
                (2_500.0, 9_880.0),
                (3_000.0, 8_580.0),
                (3_500.0, 7_670.0),
                (4_000.0, 7_020.0),
                (4_500.0, 6_500.0),
            ]),
            mtow: LookupTable::new(&[
                (49_500.0, 53_200.0),
                (53_500.0, 57_050.0),
                (57_500.0, 60_900.0),
                (61_500.0, 64_750.0),
                (65_500.0, 68_600.0),
                (69_500.0, 72_450.0),
                (73_500.0, 76_300.0),
                (77_500.0, 80_150.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [96.0, 111.0, 118.0]),
                (50_000.0, [104.0, 119.0, 126.0]),
                (58_000.0, [112.0, 127.0, 133.0]),
                (66_000.0, [120.0, 135.0, 141.0]),
                (74_000.0, [128.0, 143.0, 148.0]),
                (82_000.0, [136.0, 151.0, 156.0]),
            ]),
        },
        conf3: ContaminationTables {
            weight_correction: LookupTable::new(&[
                (1_500.0, 13_730.0),
                (2_000.0, 11_230.0),
                (2_500.0, 9_480.0),
                (3_000.0, 8_240.0),
                (3_500.0, 7_360.0),
                (4_000.0, 6_740.0),
                (4_500.0, 6_240.0),
            ]),
            mtow: LookupTable::new(&[
                (49_000.0, 52_700.0),
                (53_000.0, 56_550.0),
                (57_000.0, 60_400.0),
                (61_000.0, 64_250.0),
                (65_000.0, 68_100.0),
                (69_000.0, 71_950.0),
                (73_000.0, 75_800.0),
                (77_000.0, 79_650.0),
            ]),
            speeds: VectorLookupTable::new(&[
                (42_000.0, [93.0, 108.0, 115.0]),
                (50_000.0, [101.0, 116.0, 122.0]),
                (58_000.0, [109.0, 124.0, 130.0]),
                (66_000.0, [117.0, 132.0, 138.0]),
                (74_000.0, [125.0, 140.0, 145.0]),
                (82_000.0, [133.0, 148.0, 153.0]),
            ]),
        },
    },
};
