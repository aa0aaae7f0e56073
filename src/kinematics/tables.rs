//! Gait waypoint tables.
//!
//! Every entry is a foot offset from the default pose, in millimetres. Per-leg
//! tables hold one full cycle for each leg, already phased; shared tables are
//! phased per leg by the gait library.
use crate::robot::{config::Position, leg::LEG_COUNT};

pub type PerLegTable = [&'static [Position]; LEG_COUNT];

/// Rows of a per-leg table all have the same length.
const fn rows_match(table: &PerLegTable) -> bool {
    let len = table[0].len();
    let mut leg = 1;
    while leg < LEG_COUNT {
        if table[leg].len() != len {
            return false;
        }
        leg += 1;
    }
    len > 0
}

/// Directional cycles phase legs by quarter and half cycles.
const fn quarter_divisible(len: usize) -> bool {
    len > 0 && len % 4 == 0
}

/// Forward/backward waving.
pub const DANCE_FRONT_BACK: PerLegTable = [
    &[
        [0.00, -12.00, 0.00], [0.00, -13.72, -3.46], [0.00, -15.02, -6.76], [0.00, -15.82, -9.83],
        [0.00, -16.08, -12.59], [0.00, -15.75, -14.95], [0.00, -14.83, -16.84],
        [0.00, -13.31, -18.17], [0.00, -11.24, -18.87], [0.00, -8.69, -18.89],
        [0.00, -5.74, -18.16], [0.00, -2.53, -16.69], [0.00, 0.79, -14.47], [0.00, 4.06, -11.57],
        [0.00, 7.12, -8.09], [0.00, 9.81, -4.18], [0.00, 12.00, 0.00], [0.00, 13.60, 4.24],
        [0.00, 14.56, 8.32], [0.00, 14.87, 12.05], [0.00, 14.53, 15.24], [0.00, 13.62, 17.74],
        [0.00, 12.19, 19.47], [0.00, 10.34, 20.35], [0.00, 8.15, 20.40], [0.00, 5.71, 19.64],
        [0.00, 3.10, 18.14], [0.00, 0.40, 16.01], [0.00, -2.33, 13.35], [0.00, -5.01, 10.31],
        [0.00, -7.57, 6.99], [0.00, -9.92, 3.51],
    ],
    &[
        [0.00, -12.00, 0.00], [0.00, -13.66, 0.39], [0.00, -14.79, 0.78], [0.00, -15.34, 1.11],
        [0.00, -15.31, 1.32], [0.00, -14.68, 1.40], [0.00, -13.51, 1.32], [0.00, -11.83, 1.09],
        [0.00, -9.70, 0.76], [0.00, -7.20, 0.38], [0.00, -4.42, -0.01], [0.00, -1.46, -0.34],
        [0.00, 1.56, -0.56], [0.00, 4.54, -0.63], [0.00, 7.34, -0.55], [0.00, 9.86, -0.33],
        [0.00, 12.00, 0.00], [0.00, 13.66, 0.39], [0.00, 14.79, 0.78], [0.00, 15.34, 1.11],
        [0.00, 15.31, 1.32], [0.00, 14.68, 1.40], [0.00, 13.51, 1.32], [0.00, 11.83, 1.09],
        [0.00, 9.70, 0.76], [0.00, 7.20, 0.38], [0.00, 4.42, -0.01], [0.00, 1.46, -0.34],
        [0.00, -1.56, -0.56], [0.00, -4.54, -0.63], [0.00, -7.34, -0.55], [0.00, -9.86, -0.33],
    ],
    &[
        [0.00, -12.00, 0.00], [0.00, -13.60, 4.24], [0.00, -14.56, 8.32], [0.00, -14.87, 12.05],
        [0.00, -14.53, 15.24], [0.00, -13.62, 17.74], [0.00, -12.19, 19.47],
        [0.00, -10.34, 20.35], [0.00, -8.15, 20.40], [0.00, -5.71, 19.64], [0.00, -3.10, 18.14],
        [0.00, -0.40, 16.01], [0.00, 2.33, 13.35], [0.00, 5.01, 10.31], [0.00, 7.57, 6.99],
        [0.00, 9.92, 3.51], [0.00, 12.00, 0.00], [0.00, 13.72, -3.46], [0.00, 15.02, -6.76],
        [0.00, 15.82, -9.83], [0.00, 16.08, -12.59], [0.00, 15.75, -14.95], [0.00, 14.83, -16.84],
        [0.00, 13.31, -18.17], [0.00, 11.24, -18.87], [0.00, 8.69, -18.89], [0.00, 5.74, -18.16],
        [0.00, 2.53, -16.69], [0.00, -0.79, -14.47], [0.00, -4.06, -11.57], [0.00, -7.12, -8.09],
        [0.00, -9.81, -4.18],
    ],
    &[
        [0.00, -12.00, 0.00], [0.00, -13.60, 4.24], [0.00, -14.56, 8.32], [0.00, -14.87, 12.05],
        [0.00, -14.53, 15.24], [0.00, -13.62, 17.74], [0.00, -12.19, 19.47],
        [0.00, -10.34, 20.35], [0.00, -8.15, 20.40], [0.00, -5.71, 19.64], [0.00, -3.10, 18.14],
        [0.00, -0.40, 16.01], [0.00, 2.33, 13.35], [0.00, 5.01, 10.31], [0.00, 7.57, 6.99],
        [0.00, 9.92, 3.51], [0.00, 12.00, 0.00], [0.00, 13.72, -3.46], [0.00, 15.02, -6.76],
        [0.00, 15.82, -9.83], [0.00, 16.08, -12.59], [0.00, 15.75, -14.95], [0.00, 14.83, -16.84],
        [0.00, 13.31, -18.17], [0.00, 11.24, -18.87], [0.00, 8.69, -18.89], [0.00, 5.74, -18.16],
        [0.00, 2.53, -16.69], [0.00, -0.79, -14.47], [0.00, -4.06, -11.57], [0.00, -7.12, -8.09],
        [0.00, -9.81, -4.18],
    ],
    &[
        [0.00, -12.00, 0.00], [0.00, -13.66, 0.39], [0.00, -14.79, 0.78], [0.00, -15.34, 1.11],
        [0.00, -15.31, 1.32], [0.00, -14.68, 1.40], [0.00, -13.51, 1.32], [0.00, -11.83, 1.09],
        [0.00, -9.70, 0.76], [0.00, -7.20, 0.38], [0.00, -4.42, -0.01], [0.00, -1.46, -0.34],
        [0.00, 1.56, -0.56], [0.00, 4.54, -0.63], [0.00, 7.34, -0.55], [0.00, 9.86, -0.33],
        [0.00, 12.00, 0.00], [0.00, 13.66, 0.39], [0.00, 14.79, 0.78], [0.00, 15.34, 1.11],
        [0.00, 15.31, 1.32], [0.00, 14.68, 1.40], [0.00, 13.51, 1.32], [0.00, 11.83, 1.09],
        [0.00, 9.70, 0.76], [0.00, 7.20, 0.38], [0.00, 4.42, -0.01], [0.00, 1.46, -0.34],
        [0.00, -1.56, -0.56], [0.00, -4.54, -0.63], [0.00, -7.34, -0.55], [0.00, -9.86, -0.33],
    ],
    &[
        [0.00, -12.00, 0.00], [0.00, -13.72, -3.46], [0.00, -15.02, -6.76], [0.00, -15.82, -9.83],
        [0.00, -16.08, -12.59], [0.00, -15.75, -14.95], [0.00, -14.83, -16.84],
        [0.00, -13.31, -18.17], [0.00, -11.24, -18.87], [0.00, -8.69, -18.89],
        [0.00, -5.74, -18.16], [0.00, -2.53, -16.69], [0.00, 0.79, -14.47], [0.00, 4.06, -11.57],
        [0.00, 7.12, -8.09], [0.00, 9.81, -4.18], [0.00, 12.00, 0.00], [0.00, 13.60, 4.24],
        [0.00, 14.56, 8.32], [0.00, 14.87, 12.05], [0.00, 14.53, 15.24], [0.00, 13.62, 17.74],
        [0.00, 12.19, 19.47], [0.00, 10.34, 20.35], [0.00, 8.15, 20.40], [0.00, 5.71, 19.64],
        [0.00, 3.10, 18.14], [0.00, 0.40, 16.01], [0.00, -2.33, 13.35], [0.00, -5.01, 10.31],
        [0.00, -7.57, 6.99], [0.00, -9.92, 3.51],
    ],
];

/// Left/right waving.
pub const DANCE_SIDEWAYS: PerLegTable = [
    &[
        [-12.00, 0.00, 0.00], [-9.91, 0.00, 2.60], [-7.51, 0.00, 5.18], [-4.90, 0.00, 7.69],
        [-2.15, 0.00, 10.03], [0.65, 0.00, 12.10], [3.42, 0.00, 13.80], [6.07, 0.00, 15.03],
        [8.52, 0.00, 15.71], [10.70, 0.00, 15.75], [12.51, 0.00, 15.13], [13.87, 0.00, 13.84],
        [14.72, 0.00, 11.91], [14.98, 0.00, 9.43], [14.62, 0.00, 6.52], [13.62, 0.00, 3.32],
        [12.00, 0.00, 0.00], [9.82, 0.00, -3.26], [7.17, 0.00, -6.29], [4.17, 0.00, -8.96],
        [0.97, 0.00, -11.15], [-2.28, 0.00, -12.78], [-5.43, 0.00, -13.83], [-8.33, 0.00, -14.28],
        [-10.87, 0.00, -14.18], [-12.96, 0.00, -13.56], [-14.51, 0.00, -12.50],
        [-15.50, 0.00, -11.04], [-15.89, 0.00, -9.27], [-15.71, 0.00, -7.22],
        [-14.96, 0.00, -4.96], [-13.71, 0.00, -2.54],
    ],
    &[
        [-12.00, 0.00, 0.00], [-9.93, 0.00, 3.75], [-7.58, 0.00, 7.45], [-5.04, 0.00, 10.98],
        [-2.38, 0.00, 14.21], [0.33, 0.00, 17.01], [3.02, 0.00, 19.26], [5.62, 0.00, 20.82],
        [8.06, 0.00, 21.61], [10.25, 0.00, 21.54], [12.11, 0.00, 20.59], [13.55, 0.00, 18.75],
        [14.48, 0.00, 16.09], [14.84, 0.00, 12.72], [14.55, 0.00, 8.78], [13.60, 0.00, 4.47],
        [12.00, 0.00, 0.00], [9.80, 0.00, -4.41], [7.10, 0.00, -8.56], [4.03, 0.00, -12.25],
        [0.74, 0.00, -15.33], [-2.60, 0.00, -17.69], [-5.82, 0.00, -19.28], [-8.78, 0.00, -20.07],
        [-11.34, 0.00, -20.08], [-13.41, 0.00, -19.35], [-14.91, 0.00, -17.95],
        [-15.82, 0.00, -15.96], [-16.13, 0.00, -13.45], [-15.85, 0.00, -10.51],
        [-15.03, 0.00, -7.23], [-13.73, 0.00, -3.69],
    ],
    &[
        [-12.00, 0.00, 0.00], [-9.91, 0.00, 2.60], [-7.51, 0.00, 5.18], [-4.90, 0.00, 7.69],
        [-2.15, 0.00, 10.03], [0.65, 0.00, 12.10], [3.42, 0.00, 13.80], [6.07, 0.00, 15.03],
        [8.52, 0.00, 15.71], [10.70, 0.00, 15.75], [12.51, 0.00, 15.13], [13.87, 0.00, 13.84],
        [14.72, 0.00, 11.91], [14.98, 0.00, 9.43], [14.62, 0.00, 6.52], [13.62, 0.00, 3.32],
        [12.00, 0.00, 0.00], [9.82, 0.00, -3.26], [7.17, 0.00, -6.29], [4.17, 0.00, -8.96],
        [0.97, 0.00, -11.15], [-2.28, 0.00, -12.78], [-5.43, 0.00, -13.83], [-8.33, 0.00, -14.28],
        [-10.87, 0.00, -14.18], [-12.96, 0.00, -13.56], [-14.51, 0.00, -12.50],
        [-15.50, 0.00, -11.04], [-15.89, 0.00, -9.27], [-15.71, 0.00, -7.22],
        [-14.96, 0.00, -4.96], [-13.71, 0.00, -2.54],
    ],
    &[
        [-12.00, 0.00, 0.00], [-9.82, 0.00, -3.26], [-7.17, 0.00, -6.29], [-4.17, 0.00, -8.96],
        [-0.97, 0.00, -11.15], [2.28, 0.00, -12.78], [5.43, 0.00, -13.83], [8.33, 0.00, -14.28],
        [10.87, 0.00, -14.18], [12.96, 0.00, -13.56], [14.51, 0.00, -12.50],
        [15.50, 0.00, -11.04], [15.89, 0.00, -9.27], [15.71, 0.00, -7.22], [14.96, 0.00, -4.96],
        [13.71, 0.00, -2.54], [12.00, 0.00, 0.00], [9.91, 0.00, 2.60], [7.51, 0.00, 5.18],
        [4.90, 0.00, 7.69], [2.15, 0.00, 10.03], [-0.65, 0.00, 12.10], [-3.42, 0.00, 13.80],
        [-6.07, 0.00, 15.03], [-8.52, 0.00, 15.71], [-10.70, 0.00, 15.75], [-12.51, 0.00, 15.13],
        [-13.87, 0.00, 13.84], [-14.72, 0.00, 11.91], [-14.98, 0.00, 9.43], [-14.62, 0.00, 6.52],
        [-13.62, 0.00, 3.32],
    ],
    &[
        [-12.00, 0.00, 0.00], [-9.80, 0.00, -4.41], [-7.10, 0.00, -8.56], [-4.03, 0.00, -12.25],
        [-0.74, 0.00, -15.33], [2.60, 0.00, -17.69], [5.82, 0.00, -19.28], [8.78, 0.00, -20.07],
        [11.34, 0.00, -20.08], [13.41, 0.00, -19.35], [14.91, 0.00, -17.95],
        [15.82, 0.00, -15.96], [16.13, 0.00, -13.45], [15.85, 0.00, -10.51], [15.03, 0.00, -7.23],
        [13.73, 0.00, -3.69], [12.00, 0.00, 0.00], [9.93, 0.00, 3.75], [7.58, 0.00, 7.45],
        [5.04, 0.00, 10.98], [2.38, 0.00, 14.21], [-0.33, 0.00, 17.01], [-3.02, 0.00, 19.26],
        [-5.62, 0.00, 20.82], [-8.06, 0.00, 21.61], [-10.25, 0.00, 21.54], [-12.11, 0.00, 20.59],
        [-13.55, 0.00, 18.75], [-14.48, 0.00, 16.09], [-14.84, 0.00, 12.72], [-14.55, 0.00, 8.78],
        [-13.60, 0.00, 4.47],
    ],
    &[
        [-12.00, 0.00, 0.00], [-9.82, 0.00, -3.26], [-7.17, 0.00, -6.29], [-4.17, 0.00, -8.96],
        [-0.97, 0.00, -11.15], [2.28, 0.00, -12.78], [5.43, 0.00, -13.83], [8.33, 0.00, -14.28],
        [10.87, 0.00, -14.18], [12.96, 0.00, -13.56], [14.51, 0.00, -12.50],
        [15.50, 0.00, -11.04], [15.89, 0.00, -9.27], [15.71, 0.00, -7.22], [14.96, 0.00, -4.96],
        [13.71, 0.00, -2.54], [12.00, 0.00, 0.00], [9.91, 0.00, 2.60], [7.51, 0.00, 5.18],
        [4.90, 0.00, 7.69], [2.15, 0.00, 10.03], [-0.65, 0.00, 12.10], [-3.42, 0.00, 13.80],
        [-6.07, 0.00, 15.03], [-8.52, 0.00, 15.71], [-10.70, 0.00, 15.75], [-12.51, 0.00, 15.13],
        [-13.87, 0.00, 13.84], [-14.72, 0.00, 11.91], [-14.98, 0.00, 9.43], [-14.62, 0.00, 6.52],
        [-13.62, 0.00, 3.32],
    ],
];

/// Body rotation around the vertical axis.
pub const DANCE_TWIST: PerLegTable = [
    &[
        [0.00, 8.86, 22.74], [-1.92, 9.24, 19.56], [-3.87, 9.35, 15.81], [-5.77, 9.12, 11.61],
        [-7.54, 8.52, 7.07], [-9.12, 7.52, 2.34], [-10.42, 6.12, -2.45], [-11.40, 4.36, -7.14],
        [-12.01, 2.29, -11.58], [-12.22, 0.00, -15.64], [-12.01, -2.40, -19.19],
        [-11.40, -4.80, -22.12], [-10.42, -7.07, -24.33], [-9.12, -9.09, -25.77],
        [-7.54, -10.76, -26.39], [-5.77, -11.98, -26.19], [-3.87, -12.72, -25.18],
        [-1.92, -12.94, -23.38], [0.00, -12.67, -20.85], [1.83, -11.95, -17.67],
        [3.53, -10.86, -13.93], [5.04, -9.48, -9.73], [6.34, -7.91, -5.19], [7.41, -6.24, -0.46],
        [8.25, -4.57, 4.33], [8.84, -2.94, 9.02], [9.20, -1.41, 13.47], [9.32, 0.00, 17.53],
        [9.20, 1.30, 21.08], [8.84, 2.50, 24.00], [8.25, 3.61, 26.21], [7.41, 4.66, 27.64],
        [6.34, 5.67, 28.27], [5.04, 6.62, 28.07], [3.53, 7.49, 27.06], [1.83, 8.25, 25.26],
    ],
    &[
        [0.00, 10.77, 0.94], [-1.94, 11.29, -3.04], [-3.94, 11.40, -6.90], [-5.91, 11.05, -10.54],
        [-7.78, 10.20, -13.84], [-9.45, 8.87, -16.71], [-10.85, 7.09, -19.05],
        [-11.91, 4.95, -20.78], [-12.57, 2.54, -21.84], [-12.79, 0.00, -22.20],
        [-12.57, -2.54, -21.84], [-11.91, -4.95, -20.78], [-10.85, -7.09, -19.05],
        [-9.45, -8.87, -16.71], [-7.78, -10.20, -13.84], [-5.91, -11.05, -10.54],
        [-3.94, -11.40, -6.90], [-1.94, -11.29, -3.04], [0.00, -10.77, 0.94], [1.82, -9.91, 4.92],
        [3.46, -8.81, 8.78], [4.90, -7.55, 12.42], [6.10, -6.22, 15.72], [7.08, -4.89, 18.59],
        [7.82, -3.59, 20.93], [8.33, -2.35, 22.66], [8.64, -1.16, 23.72], [8.74, 0.0, 24.08],
        [8.64, 1.16, 23.72], [8.33, 2.35, 22.66], [7.82, 3.59, 20.93], [7.08, 4.89, 18.59],
        [6.10, 6.22, 15.72], [4.90, 7.55, 12.42], [3.46, 8.81, 8.78], [1.82, 9.91, 4.92],
    ],
    &[
        [0.00, 12.67, -20.85], [-1.92, 12.94, -23.38], [-3.87, 12.72, -25.18],
        [-5.77, 11.98, -26.19], [-7.54, 10.76, -26.39], [-9.12, 9.09, -25.77],
        [-10.42, 7.07, -24.33], [-11.40, 4.80, -22.12], [-12.01, 2.40, -19.19],
        [-12.22, 0.00, -15.64], [-12.01, -2.29, -11.58], [-11.40, -4.36, -7.14],
        [-10.42, -6.12, -2.45], [-9.12, -7.52, 2.34], [-7.54, -8.52, 7.07], [-5.77, -9.12, 11.61],
        [-3.87, -9.35, 15.81], [-1.92, -9.24, 19.56], [0.00, -8.86, 22.74], [1.83, -8.25, 25.26],
        [3.53, -7.49, 27.06], [5.04, -6.62, 28.07], [6.34, -5.67, 28.27], [7.41, -4.66, 27.64],
        [8.25, -3.61, 26.21], [8.84, -2.50, 24.00], [9.20, -1.30, 21.08], [9.32, 0.00, 17.53],
        [9.20, 1.41, 13.47], [8.84, 2.94, 9.02], [8.25, 4.57, 4.33], [7.41, 6.24, -0.46],
        [6.34, 7.91, -5.19], [5.04, 9.48, -9.73], [3.53, 10.86, -13.93], [1.83, 11.95, -17.67],
    ],
    &[
        [0.00, 12.67, -20.85], [-1.83, 11.95, -17.67], [-3.53, 10.86, -13.93],
        [-5.04, 9.48, -9.73], [-6.34, 7.91, -5.19], [-7.41, 6.24, -0.46], [-8.25, 4.57, 4.33],
        [-8.84, 2.94, 9.02], [-9.20, 1.41, 13.47], [-9.32, 0.00, 17.53], [-9.20, -1.30, 21.08],
        [-8.84, -2.50, 24.00], [-8.25, -3.61, 26.21], [-7.41, -4.66, 27.64],
        [-6.34, -5.67, 28.27], [-5.04, -6.62, 28.07], [-3.53, -7.49, 27.06],
        [-1.83, -8.25, 25.26], [0.00, -8.86, 22.74], [1.92, -9.24, 19.56], [3.87, -9.35, 15.81],
        [5.77, -9.12, 11.61], [7.54, -8.52, 7.07], [9.12, -7.52, 2.34], [10.42, -6.12, -2.45],
        [11.40, -4.36, -7.14], [12.01, -2.29, -11.58], [12.22, 0.00, -15.64],
        [12.01, 2.40, -19.19], [11.40, 4.80, -22.12], [10.42, 7.07, -24.33], [9.12, 9.09, -25.77],
        [7.54, 10.76, -26.39], [5.77, 11.98, -26.19], [3.87, 12.72, -25.18],
        [1.92, 12.94, -23.38],
    ],
    &[
        [0.00, 10.77, 0.94], [-1.82, 9.91, 4.92], [-3.46, 8.81, 8.78], [-4.90, 7.55, 12.42],
        [-6.10, 6.22, 15.72], [-7.08, 4.89, 18.59], [-7.82, 3.59, 20.93], [-8.33, 2.35, 22.66],
        [-8.64, 1.16, 23.72], [-8.74, 0.00, 24.08], [-8.64, -1.16, 23.72], [-8.33, -2.35, 22.66],
        [-7.82, -3.59, 20.93], [-7.08, -4.89, 18.59], [-6.10, -6.22, 15.72],
        [-4.90, -7.55, 12.42], [-3.46, -8.81, 8.78], [-1.82, -9.91, 4.92], [0.00, -10.77, 0.94],
        [1.94, -11.29, -3.04], [3.94, -11.40, -6.90], [5.91, -11.05, -10.54],
        [7.78, -10.20, -13.84], [9.45, -8.87, -16.71], [10.85, -7.09, -19.05],
        [11.91, -4.95, -20.78], [12.57, -2.54, -21.84], [12.79, 0.0, -22.20],
        [12.57, 2.54, -21.84], [11.91, 4.95, -20.78], [10.85, 7.09, -19.05], [9.45, 8.87, -16.71],
        [7.78, 10.20, -13.84], [5.91, 11.05, -10.54], [3.94, 11.40, -6.90], [1.94, 11.29, -3.04],
    ],
    &[
        [0.00, 8.86, 22.74], [-1.83, 8.25, 25.26], [-3.53, 7.49, 27.06], [-5.04, 6.62, 28.07],
        [-6.34, 5.67, 28.27], [-7.41, 4.66, 27.64], [-8.25, 3.61, 26.21], [-8.84, 2.50, 24.00],
        [-9.20, 1.30, 21.08], [-9.32, 0.00, 17.53], [-9.20, -1.41, 13.47], [-8.84, -2.94, 9.02],
        [-8.25, -4.57, 4.33], [-7.41, -6.24, -0.46], [-6.34, -7.91, -5.19], [-5.04, -9.48, -9.73],
        [-3.53, -10.86, -13.93], [-1.83, -11.95, -17.67], [0.00, -12.67, -20.85],
        [1.92, -12.94, -23.38], [3.87, -12.72, -25.18], [5.77, -11.98, -26.19],
        [7.54, -10.76, -26.39], [9.12, -9.09, -25.77], [10.42, -7.07, -24.33],
        [11.40, -4.80, -22.12], [12.01, -2.40, -19.19], [12.22, 0.00, -15.64],
        [12.01, 2.29, -11.58], [11.40, 4.36, -7.14], [10.42, 6.12, -2.45], [9.12, 7.52, 2.34],
        [7.54, 8.52, 7.07], [5.77, 9.12, 11.61], [3.87, 9.35, 15.81], [1.92, 9.24, 19.56],
    ],
];

/// Turn in place, one row per leg.
pub const TURN: PerLegTable = [
    &[
        [20.35, -18.49, 0.00], [16.54, -14.52, 4.00], [12.60, -10.67, 8.00], [8.52, -6.97, 12.00],
        [4.32, -3.41, 16.00], [0.00, 0.00, 20.00], [-4.44, 3.26, 16.00], [-8.99, 6.36, 12.00],
        [-13.64, 9.30, 8.00], [-18.40, 12.07, 4.00], [-23.25, 14.68, 0.00], [-18.40, 12.07, 0.00],
        [-13.64, 9.30, 0.00], [-8.99, 6.36, 0.00], [-4.44, 3.26, 0.00], [0.00, 0.00, 0.00],
        [4.32, -3.41, 0.00], [8.52, -6.97, 0.00], [12.60, -10.67, 0.00], [16.54, -14.52, 0.00],
    ],
    &[
        [-2.02, -23.14, 0.00], [-1.30, -18.54, 4.00], [-0.73, -13.93, 8.00],
        [-0.32, -9.30, 12.00], [-0.08, -4.65, 16.00], [0.00, 0.00, 20.00], [-0.08, 4.65, 16.00],
        [-0.32, 9.30, 12.00], [-0.73, 13.93, 8.00], [-1.30, 18.54, 4.00], [-2.02, 23.14, 0.00],
        [-1.30, 18.54, 0.00], [-0.73, 13.93, 0.00], [-0.32, 9.30, 0.00], [-0.08, 4.65, 0.00],
        [0.00, 0.00, 0.00], [-0.08, -4.65, 0.00], [-0.32, -9.30, 0.00], [-0.73, -13.93, 0.00],
        [-1.30, -18.54, 0.00],
    ],
    &[
        [-23.25, -14.68, 0.00], [-18.40, -12.07, 4.00], [-13.64, -9.30, 8.00],
        [-8.99, -6.36, 12.00], [-4.44, -3.26, 16.00], [0.00, 0.00, 20.00], [4.32, 3.41, 16.00],
        [8.52, 6.97, 12.00], [12.60, 10.67, 8.00], [16.54, 14.52, 4.00], [20.35, 18.49, 0.00],
        [16.54, 14.52, 0.00], [12.60, 10.67, 0.00], [8.52, 6.97, 0.00], [4.32, 3.41, 0.00],
        [0.00, 0.00, 0.00], [-4.44, -3.26, 0.00], [-8.99, -6.36, 0.00], [-13.64, -9.30, 0.00],
        [-18.40, -12.07, 0.00],
    ],
    &[
        [-20.35, 18.49, 0.00], [-16.54, 14.52, 4.00], [-12.60, 10.67, 8.00], [-8.52, 6.97, 12.00],
        [-4.32, 3.41, 16.00], [0.00, 0.00, 20.00], [4.44, -3.26, 16.00], [8.99, -6.36, 12.00],
        [13.64, -9.30, 8.00], [18.40, -12.07, 4.00], [23.25, -14.68, 0.00], [18.40, -12.07, 0.00],
        [13.64, -9.30, 0.00], [8.99, -6.36, 0.00], [4.44, -3.26, 0.00], [0.00, 0.00, 0.00],
        [-4.32, 3.41, 0.00], [-8.52, 6.97, 0.00], [-12.60, 10.67, 0.00], [-16.54, 14.52, 0.00],
    ],
    &[
        [2.02, 23.14, 0.00], [1.30, 18.54, 4.00], [0.73, 13.93, 8.00], [0.32, 9.30, 12.00],
        [0.08, 4.65, 16.00], [0.00, 0.00, 20.00], [0.08, -4.65, 16.00], [0.32, -9.30, 12.00],
        [0.73, -13.93, 8.00], [1.30, -18.54, 4.00], [2.02, -23.14, 0.00], [1.30, -18.54, 0.00],
        [0.73, -13.93, 0.00], [0.32, -9.30, 0.00], [0.08, -4.65, 0.00], [0.00, 0.00, 0.00],
        [0.08, 4.65, 0.00], [0.32, 9.30, 0.00], [0.73, 13.93, 0.00], [1.30, 18.54, 0.00],
    ],
    &[
        [23.25, 14.68, 0.00], [18.40, 12.07, 4.00], [13.64, 9.30, 8.00], [8.99, 6.36, 12.00],
        [4.44, 3.26, 16.00], [0.00, 0.00, 20.00], [-4.32, -3.41, 16.00], [-8.52, -6.97, 12.00],
        [-12.60, -10.67, 8.00], [-16.54, -14.52, 4.00], [-20.35, -18.49, 0.00],
        [-16.54, -14.52, 0.00], [-12.60, -10.67, 0.00], [-8.52, -6.97, 0.00],
        [-4.32, -3.41, 0.00], [0.00, 0.00, 0.00], [4.44, 3.26, 0.00], [8.99, 6.36, 0.00],
        [13.64, 9.30, 0.00], [18.40, 12.07, 0.00],
    ],
];

/// Walking step shared by all legs. Also drives the lateral shift.
pub const WALK: [Position; 20] = [
    [0.00, -20.00, 0.00], [6.00, -19.00, 6.00], [12.00, -16.00, 12.00], [16.00, -12.00, 16.00],
    [19.00, -6.00, 19.00], [20.00, 0.00, 20.00], [19.00, 6.00, 19.00], [16.00, 12.00, 16.00],
    [12.00, 16.00, 12.00], [6.00, 19.00, 6.00], [0.00, 20.00, 0.00], [0.00, 16.00, 0.00],
    [0.00, 12.00, 0.00], [0.00, 8.00, 0.00], [0.00, 4.00, 0.00], [0.00, 0.00, 0.00],
    [0.00, -4.00, 0.00], [0.00, -8.00, 0.00], [0.00, -12.00, 0.00], [0.00, -16.00, 0.00],
];

const _: () = assert!(rows_match(&DANCE_FRONT_BACK));
const _: () = assert!(rows_match(&DANCE_SIDEWAYS));
const _: () = assert!(rows_match(&DANCE_TWIST));
const _: () = assert!(rows_match(&TURN) && quarter_divisible(TURN[0].len()));
const _: () = assert!(quarter_divisible(WALK.len()));
