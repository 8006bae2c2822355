use bincode::Options;

use crate::result::StoreResult;

pub(crate) fn encode<S: ?Sized + serde::Serialize>(item: &S) -> StoreResult<Vec<u8>> {
    Ok(options().serialize(item)?)
}

pub(crate) fn decode<'a, T: serde::Deserialize<'a>>(bytes: &'a [u8]) -> StoreResult<T> {
    Ok(options().deserialize(bytes)?)
}

/// Big-endian fixed-width integers keep encoded ids in numeric order inside sled.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}
