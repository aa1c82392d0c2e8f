//! Generic records bind as long as the parameter is bindable.

use flagbind::{Bind, Bindable, FlagBind, FlagValue};

#[derive(Default, FlagBind)]
struct Wrapper<T: Bindable> {
    pub inner: T,
    #[flag(default = -1)]
    pub offset: i16,
}

struct Upper(String);

impl FlagValue for Upper {
    fn set(&mut self, text: &str) -> Result<(), flagbind::BoxError> {
        self.0 = text.to_uppercase();
        Ok(())
    }
}

fn main() {
    let mut numbers = Wrapper::<u64>::default();
    let _ = numbers.flag_fields();

    let mut custom = Wrapper {
        inner: Upper(String::new()),
        offset: 0,
    };
    assert_eq!(custom.flag_fields().len(), 2);
    assert_eq!(custom.inner.0, "");
}
