use crate::csv_reader::Record;

pub const ADVANCED_EDUCATION: &'static [&'static str] = &["Bachelors", "Masters", "Doctorate"];
pub const HIGH_SALARY: &'static str = ">50K";

impl Record {
    pub fn is_rich(&self) -> bool {
        self.salary == HIGH_SALARY
    }

    pub fn has_advanced_education(&self) -> bool {
        ADVANCED_EDUCATION.contains(&self.education.as_str())
    }
}

/// Read-only census table, rows kept in file order.
#[derive(Debug, Clone)]
pub struct CensusTable {
    records: Vec<Record>,
}

impl CensusTable {
    pub fn new(records: Vec<Record>) -> Self {
        CensusTable { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&Record>
    where
        P: Fn(&Record) -> bool,
    {
        self.records.iter().filter(|r| predicate(*r)).collect()
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Record) -> bool,
    {
        self.records.iter().filter(|r| predicate(*r)).count()
    }

    /// Number of records with and without advanced education.
    pub fn education_split(&self) -> (usize, usize) {
        let advanced = self.count(Record::has_advanced_education);
        (advanced, self.len() - advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sex: &str, age: u32, education: &str, salary: &str) -> Record {
        Record {
            age,
            sex: sex.to_string(),
            education: education.to_string(),
            race: "White".to_string(),
            occupation: "Sales".to_string(),
            hours_per_week: 40,
            native_country: "United-States".to_string(),
            salary: salary.to_string(),
        }
    }

    #[test]
    fn test_advanced_education_membership() {
        assert!(record("Male", 30, "Doctorate", "<=50K").has_advanced_education());
        assert!(record("Male", 30, "Masters", "<=50K").has_advanced_education());
        assert!(!record("Male", 30, "Some-college", "<=50K").has_advanced_education());
        assert!(!record("Male", 30, "bachelors", "<=50K").has_advanced_education());
    }

    #[test]
    fn test_is_rich_matches_exact_bracket() {
        assert!(record("Female", 41, "HS-grad", ">50K").is_rich());
        assert!(!record("Female", 41, "HS-grad", "<=50K").is_rich());
    }

    #[test]
    fn test_education_split_covers_table() {
        let table = CensusTable::new(vec![
            record("Male", 30, "Bachelors", ">50K"),
            record("Male", 30, "HS-grad", "<=50K"),
            record("Female", 30, "Doctorate", "<=50K"),
            record("Female", 30, "11th", "<=50K"),
            record("Female", 30, "Assoc-voc", ">50K"),
        ]);
        let (advanced, other) = table.education_split();
        assert_eq!(advanced, 2);
        assert_eq!(other, 3);
        assert_eq!(advanced + other, table.len());
    }

    #[test]
    fn test_filter_keeps_row_order() {
        let table = CensusTable::new(vec![
            record("Male", 20, "HS-grad", "<=50K"),
            record("Female", 21, "HS-grad", "<=50K"),
            record("Male", 22, "HS-grad", "<=50K"),
        ]);
        let men = table.filter(|r| r.sex == "Male");
        let ages: Vec<u32> = men.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![20, 22]);
        assert_eq!(table.count(|r| r.sex == "Female"), 1);
    }
}
