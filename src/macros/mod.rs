// rand::Rng
// fake::Fake

/// This macro expands a [`FakeLocale`](crate::generator::FakeLocale) match
/// into one `fake` call per locale.
///
/// Every `fake` locale is its own unit type, so the generic
/// `PhoneNumber(L)` faker can't be picked at runtime without spelling
/// every arm out. Pairs are `Variant => LOCALE_TYPE`.
macro_rules! fake_phone_number {
    ($locale:expr, $rng:expr, { $($variant:ident => $data:ident),+ $(,)? }) => {{
        match $locale {
            $(
                $crate::generator::FakeLocale::$variant => {
                    let number: String = fake::Fake::fake_with_rng(
                        &fake::faker::phone_number::raw::PhoneNumber(fake::locales::$data),
                        $rng,
                    );
                    number
                }
            )+
        }
    }};
}

pub(crate) use fake_phone_number;
