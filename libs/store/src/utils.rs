use alloy::{
    hex,
    primitives::{Address, U256},
};

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub fn bytes_to_address(bytes: &[u8]) -> String {
    match bytes.len() {
        20 => match Address::try_from(bytes) {
            Ok(addr) => format!("{addr:?}"),
            Err(_) => format!("<invalid address: {}>", bytes_to_hex(bytes)),
        },
        _ => format!("<invalid address length {}: {}>", bytes.len(), bytes_to_hex(bytes)),
    }
}

/// Big-endian bytes to a U256, left-padded. None when the slice is too long.
pub fn bytes_to_u256(bytes: &[u8]) -> Option<U256> {
    if bytes.len() <= 32 {
        let mut arr = [0u8; 32];
        arr[32 - bytes.len()..].copy_from_slice(bytes);
        Some(U256::from_be_bytes(arr))
    } else {
        None
    }
}

pub fn u256_to_bytes(value: U256) -> Vec<u8> {
    value.to_be_bytes::<32>().to_vec()
}

pub fn bytes_to_u256_display(bytes: &[u8]) -> String {
    match bytes_to_u256(bytes) {
        Some(amount) => format!("{amount}"),
        None => format!("<invalid u256: {}>", bytes_to_hex(bytes)),
    }
}
