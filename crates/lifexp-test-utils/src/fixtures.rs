use std::io::Write;

use tempfile::NamedTempFile;

/// Twelve rows covering the cases the loader and filters care about:
/// three African records in 2000, two more in 2010, other continents,
/// a row without a continent (Kosovo), an unparseable population (Tuvalu),
/// a zero population (Atlantis), and an extra `iso3` column.
pub const SAMPLE_CSV: &str = "\
iso3,name,continent,year,population,gdp,fertility,health_expenditure_share,life_expectancy
NGA,Nigeria,Africa,2000,122851984,69448756933,6.1,3.2,46.3
KEN,Kenya,Africa,2000,31964557,12705350153,5.0,4.6,52.2
EGY,Egypt,Africa,2000,69905988,99838543960,3.3,4.2,68.6
JPN,Japan,Asia,2000,126843000,4968359075956,1.36,7.2,81.1
IND,India,Asia,2000,1056575549,468394937262,3.3,4.0,62.5
DEU,Germany,Europe,2000,82211508,1947981991018,1.38,9.8,77.9
BRA,Brazil,South America,2000,174790339,655454015676,2.3,8.1,70.1
NGA,Nigeria,Africa,2010,158503197,363360000000,5.9,3.7,50.9
KEN,Kenya,Africa,2010,41517895,45406374426,4.6,4.8,61.2
XKX,Kosovo,,2000,1700000,,,,
TUV,Tuvalu,Oceania,2000,n/a,14000000,3.6,11.5,63.0
ZZZ,Atlantis,Europe,2000,0,1000,,,70.0
";

/// Write `contents` to a temp file that lives as long as the returned handle.
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
