//! Fixed ciphertext/key pairs with their expected plaintexts.
//!
//! The vectors were produced by an independent implementation of the same
//! cipher and are checked bit for bit in both directions.

use feistel_cbc::{decrypt, encrypt, try_decrypt, ErrorKind};

struct Vector {
    key: &'static str,
    ciphertext: &'static str,
    plaintext: &'static str,
}

const PROFILE: Vector = Vector {
    key: "x2HyGIQY87v8xiQPGTCXecdhsstJh2AZaLA4/iv0n0mPmzWBS0s9KjItPBNW7J8M9f3j4E0lF2VEiRP6GivXGAnF8ZUOxLNhA7kv7GHZxRWxxoqddLgL1HoICXjxzwXx87Cuh7ztz78xnPwss6ClngnrOx/lK+cqg/ZGvQrWULnW2TlMjx86EpJDA0jJFXglm2Sk+6B5IJOG59hZlKnts41UHQg9ZbLhrF+4m/9WAKyw/Jtwj2B7e5e33M7/7LbR1vLr21KzWIeftO90A3+ZK4cde9C/ioh7a3qfP+J7c5eIVcgoM2rd4vjNWZjJCpv4HZV9V/Dsxw6DH8qtiab+4Q==",
    ciphertext: "244673A66B4F6382791217B6B63D9EB7835C8526C581593650E0B0FB2235E46EA0C6469A72F00BA8DD323F8D0A056EA842AB1BF2DC2B65B690552EA348FF7073836EE7797096F5AC949EEE4B8CE343BBB4F3D2A582763D2DCD2F201E54E440B997DA02E13202DCA3D9DF3F76C5A89E09FF7E7031A716A4181C2F7F149B7C7B58",
    plaintext: "Instagram: \ninstagram.com/rasvanz5\n\n - currently active only on Instagram",
};

// 258-byte key: trailing material past 256 bytes is ignored
const HOBBIES: Vector = Vector {
    key: "z1gV2vcy2whIbXzbtotmoU668Ztc8Bjx9ewD47/r4yjGjNrSJvFcO7rJIhTsTI4EvU/W6V7uh+N9l5a6bmFtyZ1KzYXbNrKyrlGjmPazmM7aSjvscVbDji4wI3VdvEsDIKM/Pa9rJS2XMUPx+556hkPz4+savzW2ypQcWAOP8xyVuUFtgbHvXkSIq04jCve5Okg2t5+l4W9Uaejuc9RpExIsfA+DvfVWhhYjg4fh45JU2hvI90spBDaTwFNS13fGiRVccSnl3/lY9V38nm+HnEgBkRbgJupDQ4WSdRtGIF2Y6fU0XaLU8PHfGhj6fTeZBWF7EJUVtMBF8mNkSyVAiWek",
    ciphertext: "72BC5AB50C57A87B9FF17D9DBC84803FEDE5D1B6BD83F31CB5B0AD65D53F5B2BCC894853EB82701BAB4B83A4F89641F2306AA39A0C753D2548A06AF0A34E9652781B55D34B3FCD08F07392604F262960C665BFD5CBF4B7CE3A990F83D3A049F62C031BC5B0A85A31203AB106B1D0C070EF6389B0F9B55EFA8D87D9E98F6E1401",
    plaintext: " - Chess\n - Trips\n - Movies, TV Series, Anime\n - Music\n - Gym\n - Watches\n - Fragrances",
};

const SHORT: Vector = Vector {
    key: "j2KxvTGlkMwfemQXFUTmn5giZD1HDnLbvqO+rcQwXSLWPKpAAsfiX/K+sxFeanYs+TyQDBc99xC1gdoy15nUUrKjRDoYV/2hQXt4TtyMQwYZaWWL5yiMysPTF5oaYbgxthzYhm77ZeIpJ4jF8lymzWl7+oNZfyE5bkb6Pi4L7oTFivZMpeGG984W+lKInlxLoRfBp3Po3tSyQARCGSGORtRa69bnY4eE3PBY3CqEID7Cr+5y10AonZ2aOzB0qGX0tVJz9MMRTwoYPR4Kc0vnhGlDZCVx4CVL4SKky8hHOZla/mEvYFNtiNBVnYuvnB3hPWDPiykDWt466J/An0Bviw==",
    ciphertext: "340AB845459E01D02441BD2C2E7FEDA4EE04F10635DB49E085C7A7A5A9D46680A707A2C239FC9D48C985AD2A65515D1764804937E29FCC2B8E4B7A0951DDEF96",
    plaintext: "short",
};

// 64-byte message: the second block is pure padding
const FULL_BLOCK: Vector = Vector {
    key: "vQg8hp1oWuugkuALGiG8ELGgoNlYbs2Ps6XCPWRo9Brqr+iamhlew6WOTTVjiIHVVuHoo8QaFNh47C/saDsGsIJooHrxSS2PxCHNdbDqu6xsIjP0O5tSG7XBgNI/6cpVVU1rRksgW2W6vjjhK47TkDnSiqluBO0jrbyrUTzYBR/XN5c+1+yUGjM8o/bzAfd85p7yiUZ3lWC7i9ttovwqm+PNxcmtnImgEcaTB98/XEfLuMWActowbgnL/1IiBLIxqB4uezAyfj6iBfYObG7ACtjh8xECjIcKdNoWIk8kYuObykSrcjy7ygfkm/eqfE+ICs84MWTVG1Cz7Syg1UNV1w==",
    ciphertext: "B72056674247AFFC8AEF45AE45994A14AF63E3010251532DBB1442D14F102024A6CC68C00030EC3C70C8355CD7AFEDF9D1000825F84AB054368198907E48F74C1BD682C96A10FFB2C57DC5EE3A398CA8543262C835AA2960588B0948AE83E9FE716155915FD871F9639E587A21869503E6514B94742A0BF884A8BE44F6DED003",
    plaintext: "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
};

const VECTORS: [Vector; 4] = [PROFILE, HOBBIES, SHORT, FULL_BLOCK];

#[test]
fn test_decrypt_known_answers() {
    for vector in &VECTORS {
        assert_eq!(decrypt(vector.ciphertext, vector.key).unwrap(), vector.plaintext);
    }
}

#[test]
fn test_encrypt_known_answers() {
    for vector in &VECTORS {
        assert_eq!(encrypt(vector.plaintext, vector.key).unwrap(), vector.ciphertext);
    }
}

#[test]
fn test_wrong_key_fails_padding() {
    let err = try_decrypt(PROFILE.ciphertext, SHORT.key).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Padding);
    assert!(decrypt(PROFILE.ciphertext, SHORT.key).is_err());
}

#[test]
fn test_tampered_last_byte_fails_padding() {
    let mut tampered = PROFILE.ciphertext.to_string();
    tampered.replace_range(254.., "59"); // 0x58 ^ 0x01

    let err = try_decrypt(&tampered, PROFILE.key).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Padding);
}

#[test]
fn test_tampered_first_byte_fails_encoding() {
    // Flipping the top bit of C0[0] scrambles block 0 and flips the top bit
    // of P1[0], while the padding in block 1 stays intact
    let mut tampered = PROFILE.ciphertext.to_string();
    tampered.replace_range(..2, "A4"); // 0x24 ^ 0x80

    let err = try_decrypt(&tampered, PROFILE.key).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
}

#[test]
fn test_truncated_to_one_block_fails() {
    // Block 0 on its own decrypts to text without valid padding
    let first_block = &PROFILE.ciphertext[..128];
    assert!(decrypt(first_block, PROFILE.key).is_err());
}
