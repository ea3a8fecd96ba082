use csv::StringRecord;
use proptest::prelude::*;

use csv_copy_batch::{
    core::{
        item::RowMapper,
        step::{dump, load},
    },
    item::csv::{csv_reader::CsvItemReaderBuilder, csv_writer::CsvItemWriterBuilder},
    record::{User, UserRowMapper},
};

fn user_strategy() -> impl Strategy<Value = User> {
    (
        any::<i64>(),
        "\\PC{0,12}",
        "\\PC{0,12}",
        any::<i64>(),
        "[A-Z]{2}",
    )
        .prop_map(|(id, first_name, last_name, age, state)| User {
            id,
            first_name,
            last_name,
            age,
            state,
        })
}

proptest! {
    #[test]
    fn encoded_user_decodes_to_itself(user in user_strategy()) {
        let mapper = UserRowMapper::default();

        let row = mapper.unmap_row(&user);

        prop_assert_eq!(mapper.map_row(&row).unwrap(), user);
    }

    #[test]
    fn canonical_row_encodes_back_to_itself(
        id in any::<i64>(),
        first_name in "[a-zA-Z ,\"]{0,10}",
        last_name in "[a-zA-Z ,\"]{0,10}",
        age in 0i64..150,
        state in "[A-Z]{2}",
    ) {
        let mapper = UserRowMapper::default();
        let fields = vec![id.to_string(), first_name, last_name, age.to_string(), state];
        let row = StringRecord::from(fields.clone());

        let user = mapper.map_row(&row).unwrap();

        prop_assert_eq!(mapper.unmap_row(&user), fields);
    }

    #[test]
    fn users_survive_a_csv_round_trip(users in prop::collection::vec(user_strategy(), 0..8)) {
        let writer = CsvItemWriterBuilder::new()
            .row_mapper(UserRowMapper::default())
            .from_writer(Vec::new());
        dump::<User>(&writer, &users).unwrap();
        let bytes = writer.into_inner().unwrap();

        let reader = CsvItemReaderBuilder::new()
            .row_mapper(UserRowMapper::default())
            .from_reader(bytes.as_slice());

        prop_assert_eq!(load::<User>(&reader).unwrap(), users);
    }
}
