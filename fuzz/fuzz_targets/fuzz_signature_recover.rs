#![no_main]

use libfuzzer_sys::fuzz_target;

use meshvote_crypto::{recover_public_key, RECOVERABLE_SIGNATURE_LEN};

// First byte picks the split between message and signature.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize).min(rest.len());
    let (message, signature) = rest.split_at(split);

    if let Ok(key) = recover_public_key(message, signature) {
        assert_eq!(signature.len(), RECOVERABLE_SIGNATURE_LEN);
        assert_eq!(&signature[64..], key.as_bytes());
    }
});
