#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match &$e {
            None => {}
            Some(actual) => panic!("expected `None`; actual=Some({:?})", actual),
        }
    };
}
