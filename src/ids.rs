use rand::Rng;

/// URL-safe alphabet: 64 symbols, so each character carries 6 bits.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                          abcdefghijklmnopqrstuvwxyz\
                          0123456789_-";
pub const ID_LEN: usize = 21;

/// Generate an opaque id for a new user or todo.
///
/// 21 characters over a 64-symbol alphabet gives 126 bits of randomness from
/// the thread-local CSPRNG; ids are never coordinated with the store.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
