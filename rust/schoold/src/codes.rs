/// Next serial for codes shaped `<stem><digits>`: one past the highest serial
/// already present, starting at 1.
pub fn next_serial<'a, I>(existing: I, stem: &str) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .filter_map(|code| code.strip_prefix(stem))
        .filter_map(|rest| rest.parse::<u32>().ok())
        .max()
        .map(|m| m.saturating_add(1))
        .unwrap_or(1)
}

/// `PAY006` style ids for finance records.
pub fn sequential_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format!("{}{:03}", prefix, next_serial(existing, prefix))
}

/// `STU/2024/0007`
pub fn student_code<'a, I>(prefix: &str, year: i32, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let stem = format!("{}/{}/", prefix, year);
    format!("{}{:04}", stem, next_serial(existing, &stem))
}

/// `ID-2024-0003`
pub fn card_number<'a, I>(prefix: &str, year: i32, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let stem = format!("{}-{}-", prefix, year);
    format!("{}{:04}", stem, next_serial(existing, &stem))
}
