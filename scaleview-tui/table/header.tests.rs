use rstest::rstest;

use super::*;

fn test_header() -> Header {
    Header::from(Box::new([
        Column::new("NAME"),
        Column::bound("VALUE", 3, 10, true),
        Column::bound("DESCRIPTION", 5, 15, false),
    ]))
}

#[test]
fn get_text_default_lengths_test() {
    assert_eq!(" NAME VALUE DESCRIPTION", test_header().get_text());
}

#[rstest]
#[case([0, 0, 0], " NAME VALUE DESCRIPTION")]
#[case([10, 7, 3], " NAME   VALUE DESCRIPTION")]
#[case([2, 30, 13], " NAME      VALUE DESCRIPTION  ")]
#[case([4, 2, 40], " NAME VALUE DESCRIPTION    ")]
fn get_text_data_lengths_test(#[case] lengths: [usize; 3], #[case] expected: &str) {
    let mut header = test_header();
    for (column, len) in lengths.into_iter().enumerate() {
        header.set_data_length(column, len);
    }

    assert_eq!(expected, header.get_text());
}

#[test]
fn data_lengths_test() {
    let mut header = test_header();
    assert_eq!(3, header.get_columns_count());
    assert_eq!(5, header.get_data_length(1));

    header.set_data_length(1, 8);
    header.set_data_length(7, 8);
    assert_eq!(8, header.get_data_length(1));
    assert_eq!(0, header.get_data_length(7));

    header.reset_data_lengths();
    assert!(header.columns().iter().all(|c| c.data_len == 0));
    assert_eq!(5, header.columns()[1].len());
}

#[test]
fn column_names_test() {
    let names = test_header().columns().iter().map(|c| c.name).collect::<Vec<_>>();
    assert_eq!(vec!["NAME", "VALUE", "DESCRIPTION"], names);
}
