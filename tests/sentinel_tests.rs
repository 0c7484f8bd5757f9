use chained_sequence::{drop_omitted, Arg};

#[test]
fn test_omitted_is_distinct_from_every_value() {
    assert_ne!(Arg::<Option<i32>>::Omitted, Arg::Present(None));
    assert_ne!(Arg::Omitted, Arg::Present(0));
    assert_eq!(Arg::<i32>::default(), Arg::Omitted);
}

#[test]
fn test_arg_accessors() {
    let present = Arg::Present(3);
    let omitted: Arg<i32> = Arg::Omitted;

    assert!(present.is_present());
    assert!(omitted.is_omitted());
    assert_eq!(present.into_option(), Some(3));
    assert_eq!(omitted.into_option(), None);
    assert_eq!(present.as_ref(), Arg::Present(&3));
    assert_eq!(present.map(|v| v * 2), Arg::Present(6));
    assert_eq!(omitted.map(|v| v * 2), Arg::Omitted);
    assert_eq!(omitted.unwrap_or(9), 9);
    assert_eq!(present.unwrap_or_else(|| 9), 3);
    assert_eq!(Arg::from("x"), Arg::Present("x"));
}

#[test]
fn test_drop_omitted_keeps_positional_order() {
    assert_eq!(drop_omitted([Arg::Present(5), Arg::Omitted, Arg::Omitted]), vec![5]);
    assert_eq!(drop_omitted([Arg::Present(5), Arg::Omitted, Arg::Present(2)]), vec![5, 2]);
    assert_eq!(drop_omitted(vec![Arg::<u8>::Omitted; 3]), Vec::<u8>::new());

    // an explicit None survives stripping
    assert_eq!(
        drop_omitted([Arg::Present(None), Arg::Omitted, Arg::Present(Some(1))]),
        vec![None, Some(1)]
    );
}
