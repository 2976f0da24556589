use std::borrow::Cow;

/// A value that can be rendered as the body of a log record.
/// String-like types pass through unchanged; scalar types are converted to
/// their canonical decimal text first. Either way the rendered body is still
/// subject to line-splitting on embedded `'\n'`.
pub trait Loggable {
    /// Renders the value as the record body.
    fn to_body(&self) -> Cow<'_, str>;
}

impl Loggable for str {
    fn to_body(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Loggable for String {
    fn to_body(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Loggable for Cow<'_, str> {
    fn to_body(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_body(&self) -> Cow<'_, str> {
        (**self).to_body()
    }
}

// Scalars render through Display, like everything the original dispatched
// to a to-string conversion.
macro_rules! impl_loggable_via_display {
    ($($t:ty)*) => {
        $(
            impl Loggable for $t {
                fn to_body(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_loggable_via_display! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64 bool char
}
