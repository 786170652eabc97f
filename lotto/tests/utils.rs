pub fn fixed_picker(draws: Vec<Vec<i64>>) -> impl FnMut() -> Vec<i64> {
    let mut remaining = draws.into_iter();
    move || remaining.next().expect("fixed picker ran out of draws")
}

/// Eight tickets of which only the first wins anything against 1..=6 with bonus 7.
pub fn eight_tickets() -> Vec<Vec<i64>> {
    vec![
        vec![1, 2, 3, 10, 11, 12],
        vec![13, 14, 15, 16, 17, 18],
        vec![19, 20, 21, 22, 23, 24],
        vec![25, 26, 27, 28, 29, 30],
        vec![31, 32, 33, 34, 35, 36],
        vec![37, 38, 39, 40, 41, 42],
        vec![43, 44, 45, 7, 8, 9],
        vec![12, 11, 10, 9, 8, 7],
    ]
}

pub fn output_of(bytes: Vec<u8>) -> anyhow::Result<String> {
    Ok(String::from_utf8(bytes)?)
}
