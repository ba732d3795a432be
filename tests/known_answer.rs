use sdes::{Error, SimplifiedDes};

// (key, plaintext, ciphertext) triples cross-checked against the worked
// examples in the S-DES course literature.
const VECTORS: &[(u16, u8, u8)] = &[
    (0b10_1000_0010, 0xB5, 0x1B),
    (0b10_1000_0010, 0x00, 0xCE),
    (0b10_1000_0010, 0xC8, 0x42),
    (0b00_0000_0011, 0xAF, 0xD8),
    (0b00_1111_0010, 0x5A, 0x07),
    (0b00_0000_0000, 0x00, 0xF0),
    (0b11_1111_1111, 0xFF, 0x0F),
];

#[test]
fn known_answers() {
    for &(key, plain, cipher) in VECTORS {
        let sdes = SimplifiedDes::new(key).unwrap();
        assert_eq!(sdes.encrypt_block(plain), cipher, "key {:#05x}", key);
        assert_eq!(sdes.decrypt_block(cipher), plain, "key {:#05x}", key);
    }
}

#[test]
fn round_trip_every_key_and_block() {
    for key in 0..=0x3FFu16 {
        let sdes = SimplifiedDes::new(key).unwrap();
        for block in 0..=0xFFu8 {
            assert_eq!(
                sdes.decrypt_block(sdes.encrypt_block(block)),
                block,
                "key {:#05x} block {:#04x}",
                key,
                block
            );
        }
    }
}

#[test]
fn checked_round_trip() {
    let sdes = SimplifiedDes::new(3).unwrap();
    let cipher = sdes.encrypt(175).unwrap();
    assert_eq!(sdes.decrypt(cipher.into()).unwrap(), 175);
}

#[test]
fn subkeys_are_cached_and_deterministic() {
    let sdes = SimplifiedDes::new(0b10_1000_0010).unwrap();
    assert_eq!(sdes.master_key(), 0b10_1000_0010);
    assert_eq!(sdes.subkeys(), (0b1010_0100, 0b0100_0011));

    let again = SimplifiedDes::new(0b10_1000_0010).unwrap();
    assert_eq!(again.subkeys(), sdes.subkeys());
}

#[test]
fn binary_key_constructor() {
    let sdes = SimplifiedDes::with_binary_key(&[0x02, 0x82]).unwrap();
    assert_eq!(sdes.master_key(), 0x282);
    assert_eq!(sdes.subkeys(), (0xA4, 0x43));
}

#[test]
fn out_of_range_values_are_rejected() {
    assert_eq!(SimplifiedDes::new(1024).unwrap_err(), Error::InvalidKey(1024));
    assert_eq!(
        SimplifiedDes::with_binary_key(&[0x04, 0x00]).unwrap_err(),
        Error::InvalidKey(1024)
    );

    let sdes = SimplifiedDes::new(3).unwrap();
    assert_eq!(sdes.encrypt(256).unwrap_err(), Error::InvalidBlock(256));
    assert_eq!(sdes.decrypt(0x1FF).unwrap_err(), Error::InvalidBlock(0x1FF));
}

#[test]
fn block_cipher_trait_agrees_with_inherent_api() {
    use sdes::block_cipher_trait::BlockCipher;
    use sdes::generic_array::GenericArray;

    let key = GenericArray::clone_from_slice(&[0x02, 0x82]);
    let cipher = <SimplifiedDes as BlockCipher>::new(&key);
    let reference = SimplifiedDes::new(0x282).unwrap();

    let mut block = GenericArray::clone_from_slice(&[0xB5]);
    BlockCipher::encrypt_block(&cipher, &mut block);
    assert_eq!(block[0], reference.encrypt_block(0xB5));
    BlockCipher::decrypt_block(&cipher, &mut block);
    assert_eq!(block[0], 0xB5);
}
