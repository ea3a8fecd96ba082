use std::fmt;

use csv::StringRecord;
use serde::{Deserialize, Deserializer};

use crate::{core::item::RowMapper, error::BatchError};

/// Number of positional fields a user row must carry.
pub const USER_FIELDS: usize = 5;

/// One person as stored in a `id,first_name,last_name,age,state` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "lenient")]
    pub age: i64,
    pub state: String,
}

impl User {
    pub fn new(id: i64, first_name: &str, last_name: &str, age: i64, state: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            age,
            state: state.to_owned(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {}}}",
            self.id, self.first_name, self.last_name, self.age, self.state
        )
    }
}

/// Lenient numeric parse.
///
/// Parses `value` as a base-10 integer and substitutes `0` when it does not
/// parse. Numeric columns never fail a row: `"abc"`, `""` and out of range
/// values all become `0`.
///
/// # Examples
///
/// ```
/// use csv_copy_batch::record::lenient_int;
///
/// assert_eq!(lenient_int("43"), 43);
/// assert_eq!(lenient_int("-7"), -7);
/// assert_eq!(lenient_int("abc"), 0);
/// ```
pub fn lenient_int(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}

fn lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(lenient_int(&raw))
}

/// Row codec for [`User`].
///
/// Decoding takes the first five fields positionally and ignores any extra
/// ones. A row with fewer than five fields is rejected with
/// [`BatchError::MalformedRow`]. Encoding writes integers in canonical
/// decimal form and strings untouched.
///
/// # Examples
///
/// ```
/// use csv::StringRecord;
/// use csv_copy_batch::core::item::RowMapper;
/// use csv_copy_batch::record::{User, UserRowMapper};
///
/// let mapper = UserRowMapper::default();
/// let row = StringRecord::from(vec!["3", "Jim", "Todd", "abc", "WV"]);
///
/// let user = mapper.map_row(&row).unwrap();
/// assert_eq!(user, User::new(3, "Jim", "Todd", 0, "WV"));
///
/// let row = mapper.unmap_row(&user);
/// assert_eq!(row, vec!["3", "Jim", "Todd", "0", "WV"]);
/// ```
#[derive(Default)]
pub struct UserRowMapper {}

impl RowMapper<User> for UserRowMapper {
    fn map_row(&self, row: &StringRecord) -> Result<User, BatchError> {
        if row.len() < USER_FIELDS {
            return Err(BatchError::MalformedRow {
                line: row.position().map_or(0, |position| position.line()),
                found: row.len(),
                expected: USER_FIELDS,
            });
        }

        let fields: StringRecord = row.iter().take(USER_FIELDS).collect();
        fields
            .deserialize(None)
            .map_err(|error| BatchError::ItemReader(error.to_string()))
    }

    fn unmap_row(&self, item: &User) -> StringRecord {
        let mut row = StringRecord::with_capacity(64, USER_FIELDS);
        row.push_field(&item.id.to_string());
        row.push_field(&item.first_name);
        row.push_field(&item.last_name);
        row.push_field(&item.age.to_string());
        row.push_field(&item.state);
        row
    }
}

#[cfg(test)]
mod tests {
    use csv::StringRecord;

    use super::{lenient_int, User, UserRowMapper};
    use crate::{core::item::RowMapper, error::BatchError};

    #[test]
    fn row_should_be_decoded_positionally() {
        let mapper = UserRowMapper::default();
        let row = StringRecord::from(vec!["1", "Jim", "Todd", "43", "WV"]);

        let user = mapper.map_row(&row).unwrap();

        assert_eq!(user, User::new(1, "Jim", "Todd", 43, "WV"));
    }

    #[test]
    fn non_numeric_fields_should_become_zero() {
        let mapper = UserRowMapper::default();

        let user = mapper
            .map_row(&StringRecord::from(vec!["x1", "Ann", "Lee", "", "CA"]))
            .unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.age, 0);
        assert_eq!(user.first_name, "Ann");
    }

    #[test]
    fn extra_fields_should_be_ignored() {
        let mapper = UserRowMapper::default();
        let row = StringRecord::from(vec!["2", "Ann", "Lee", "29", "CA", "extra", "more"]);

        let user = mapper.map_row(&row).unwrap();

        assert_eq!(user, User::new(2, "Ann", "Lee", 29, "CA"));
    }

    #[test]
    fn short_row_should_be_rejected() {
        let mapper = UserRowMapper::default();
        let row = StringRecord::from(vec!["2", "Ann", "Lee", "29"]);

        let result = mapper.map_row(&row);

        match result {
            Err(BatchError::MalformedRow {
                found, expected, ..
            }) => {
                assert_eq!(found, 4);
                assert_eq!(expected, 5);
            }
            other => panic!("expected a malformed row error, got {:?}", other),
        }
    }

    #[test]
    fn text_fields_should_pass_through_untouched() {
        let mapper = UserRowMapper::default();
        let row = StringRecord::from(vec!["4", " Mary Ann ", "O\"Neil", "51", "N,Y"]);

        let user = mapper.map_row(&row).unwrap();

        assert_eq!(user.first_name, " Mary Ann ");
        assert_eq!(user.last_name, "O\"Neil");
        assert_eq!(user.state, "N,Y");
        assert_eq!(mapper.unmap_row(&user), row);
    }

    #[test]
    fn integers_should_be_encoded_canonically() {
        let mapper = UserRowMapper::default();

        let row = mapper.unmap_row(&User::new(-12, "A", "B", 7, "TX"));

        assert_eq!(row, vec!["-12", "A", "B", "7", "TX"]);
    }

    #[test]
    fn leading_zeros_are_not_preserved() {
        let mapper = UserRowMapper::default();
        let row = StringRecord::from(vec!["007", "James", "Bond", "+40", "UK"]);

        let user = mapper.map_row(&row).unwrap();

        assert_eq!(mapper.unmap_row(&user), vec!["7", "James", "Bond", "40", "UK"]);
    }

    #[test]
    fn lenient_int_should_reject_overflow_and_whitespace() {
        assert_eq!(lenient_int("99999999999999999999"), 0);
        assert_eq!(lenient_int(" 5"), 0);
        assert_eq!(lenient_int("1_000"), 0);
        assert_eq!(lenient_int("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn user_should_display_in_braces() {
        let user = User::new(1, "Jim", "Todd", 43, "WV");

        assert_eq!(user.to_string(), "{1 Jim Todd 43 WV}");
    }
}
