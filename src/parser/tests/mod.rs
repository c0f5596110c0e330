//! Test utilities for the LAS parser

use crate::models::LasDocument;
use crate::parser::LasParser;


/// Minimal LAS 2.0 file with three curves and two data rows
pub fn sample_las_v2() -> &'static str {
    r#"~VERSION INFORMATION
 VERS.                  2.0 :   CWLS LOG ASCII STANDARD -VERSION 2.0
 WRAP.                  NO  :   ONE LINE PER DEPTH STEP
~WELL INFORMATION
#MNEM.UNIT       DATA                   DESCRIPTION
 STRT.M          1670.0000              : START DEPTH
 STOP.M          1669.7500              : STOP DEPTH
 STEP.M          -0.1250                : STEP
 NULL.           -999.25                : NULL VALUE
 COMP.           ANY OIL COMPANY INC.   : COMPANY
 WELL.           AAAAA_2                : WELL
~CURVE INFORMATION
 DEPT.M                                 : 1  DEPTH
 DT  .US/M       60 520 32 00           : 2  SONIC TRANSIT TIME
 GR  .GAPI                              : 3  GAMMA RAY
~PARAMETER INFORMATION
 BHT .DEGC       35.5000                : BOTTOM HOLE TEMPERATURE
 MDEN.KG/M3      2710.0000              : LOGGING MATRIX DENSITY
~OTHER
 Note: this file is a test fixture.
~A  DEPTH     DT       GR
1670.000   123.450   45.000
1669.875   -999.25   46.500
"#
}

/// LAS 3.0 file with arrays, a string curve, zones and two data sections
pub fn sample_las_v3() -> &'static str {
    r#"~Version
 VERS.   3.0  : CWLS LOG ASCII STANDARD - VERSION 3.0
 WRAP.   NO   : ONE LINE PER DEPTH STEP
 DLM .   COMMA : DELIMITING CHARACTER
~Well
 NULL.   -999.25 : NULL VALUE
 WELL.   Test 3.0 Well : WELL
~Parameter
 BHT .DEGC  35.5  : Bottom hole temperature | Run[1]
 MDWT.KG/M3 1200  : Mud weight | Run[2]
 RUN[1].    1     : Run number
~Curve
 DEPT.M           : Depth {F}
 NMR[1].ms        : NMR bin {A:0}
 NMR[2].ms        : NMR bin {A:5}
 FAC .            : Facies {S}
~A Primary
1000.0, 1.5, 2.5, SAND
1000.5, 1.6, 2.6, SHALE
~A Secondary
1001.0, 1.7, 2.7, LIME
"#
}

pub fn parse(content: &str) -> LasDocument {
    LasParser::new().parse(content).document
}
