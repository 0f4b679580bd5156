use rstest::rstest;

use super::*;

#[rstest]
#[case("red", TextColors::new(Color::Red))]
#[case("white:blue", TextColors::bg(Color::White, Color::Blue))]
#[case("black: darkgray :gray", TextColors::dim(Color::Black, Color::DarkGray, Color::Gray))]
#[case("#ff0000", TextColors::new(Color::Rgb(255, 0, 0)))]
fn deserialize_text_colors_test(#[case] input: &str, #[case] expected: TextColors) {
    let colors: TextColors = serde_yaml::from_str(input).unwrap();
    assert_eq!(expected, colors);
}

#[rstest]
#[case("not-a-color")]
#[case("red:blue:green:white")]
#[case("red:nope")]
fn deserialize_invalid_text_colors_test(#[case] input: &str) {
    assert!(serde_yaml::from_str::<TextColors>(input).is_err());
}

#[test]
fn serialize_text_colors_test() {
    assert_eq!("Red\n", serde_yaml::to_string(&TextColors::new(Color::Red)).unwrap());
    assert_eq!(
        "White:Blue\n",
        serde_yaml::to_string(&TextColors::bg(Color::White, Color::Blue)).unwrap()
    );
    assert_eq!(
        "Yellow:DarkGray:Reset\n",
        serde_yaml::to_string(&TextColors::dim(Color::Yellow, Color::DarkGray, Color::Reset)).unwrap()
    );
}

#[test]
fn table_colors_defaults_test() {
    let colors: TableColors = serde_yaml::from_str("row: green").unwrap();
    assert_eq!(TextColors::new(Color::Green), colors.row);
    assert_eq!(TableColors::default().header, colors.header);
    assert_eq!(TableColors::default().incomplete, colors.incomplete);
}
