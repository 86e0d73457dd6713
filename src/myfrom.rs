use kstring::KString;

// FUTURE: figure out how to inherit from `From` (and keep all the
// existing From definitions for KString). It doesn't work out of the
// box (various errors).
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

// Can't do KString::from_static: no way to have a separate trait impl
// for &'static.
impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}

impl MyFrom<u32> for KString {
    fn myfrom(val: u32) -> Self {
        KString::from_string(val.to_string())
    }
}

/// Integral values print without a fractional part (`2`, not `2.0`),
/// everything else in its shortest round-trip form (`1.5`).
impl MyFrom<f64> for KString {
    fn myfrom(val: f64) -> Self {
        KString::from_string(format_number(val))
    }
}

pub fn format_number(val: f64) -> String {
    if val.is_finite() && val.fract() == 0.0 && val.abs() < 1e15 {
        format!("{}", val as i64)
    } else {
        format!("{val}")
    }
}

pub fn kstring<T>(s: T) -> KString
where KString: MyFrom<T>
{
    KString::myfrom(s)
}
