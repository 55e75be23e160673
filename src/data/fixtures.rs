//! In-memory CSV sources shared by the unit tests.

use super::loader::load_from_readers;
use super::model::TownDataset;

/// Town C has no education row, A appears twice.
pub const DEMOGRAPHICS_CSV: &str = "\
Town,refArea,Average family size - 1 to 3 members,Average family size - 4 to 6 members,Average family size - 7 or more members ,Percentage of Women
A,http://example.org/a,2,3,1,51
B,http://example.org/b,1,1,1,49
C,http://example.org/c,3,4,2,50
A,http://example.org/a2,9,9,9,10
";

/// Headers carry stray whitespace and the "illeterate" misspelling.
/// Town D has no demographics row.
pub const EDUCATION_CSV: &str = "\
Town, PercentageofEducationlevelofresidents-illeterate ,PercentageofEducationlevelofresidents-elementary,PercentageofEducationlevelofresidents-university,Observation URI
A,5,60,10,http://example.org/obs/a
B,2,40,20,http://example.org/obs/b
D,7,30,5,http://example.org/obs/d
";

pub fn sample_dataset() -> TownDataset {
    load_from_readers(DEMOGRAPHICS_CSV.as_bytes(), EDUCATION_CSV.as_bytes())
        .expect("fixture sources are valid")
}
