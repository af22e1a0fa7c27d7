use super::encode::*;
use super::*;
use alloc::vec::Vec;
use hex_literal::hex;

fn emit<F>(f: F) -> Vec<u8>
where
    F: FnOnce(&mut Encoder) -> Result<usize, Error>,
{
    let mut buf = [0u8; 64];
    let mut e = Encoder::new(&mut buf);
    let len = f(&mut e).unwrap();
    assert_eq!(len, e.offset());
    e.written().to_vec()
}

#[test]
fn rfc_tests() {
    // RFC 8949, Appendix A:
    // https://www.rfc-editor.org/rfc/rfc8949.html#section-appendix.a

    assert_eq!(emit(|e| e.put_unsigned(0)), hex!("00"));
    assert_eq!(emit(|e| e.put_unsigned(1)), hex!("01"));
    assert_eq!(emit(|e| e.put_unsigned(10)), hex!("0a"));
    assert_eq!(emit(|e| e.put_unsigned(23)), hex!("17"));
    assert_eq!(emit(|e| e.put_unsigned(24)), hex!("1818"));
    assert_eq!(emit(|e| e.put_unsigned(25)), hex!("1819"));
    assert_eq!(emit(|e| e.put_unsigned(100)), hex!("1864"));
    assert_eq!(emit(|e| e.put_unsigned(256)), hex!("190100"));
    assert_eq!(emit(|e| e.put_unsigned(1000)), hex!("1903e8"));
    assert_eq!(emit(|e| e.put_unsigned(1000000)), hex!("1a000f4240"));
    assert_eq!(
        emit(|e| e.put_unsigned(1000000000000)),
        hex!("1b000000e8d4a51000")
    );
    assert_eq!(
        emit(|e| e.put_unsigned(18446744073709551615)),
        hex!("1bffffffffffffffff")
    );

    assert_eq!(emit(|e| e.put_number(-1)), hex!("20"));
    assert_eq!(emit(|e| e.put_number(-10)), hex!("29"));
    assert_eq!(emit(|e| e.put_number(-24)), hex!("37"));
    assert_eq!(emit(|e| e.put_number(-100)), hex!("3863"));
    assert_eq!(emit(|e| e.put_number(-1000)), hex!("3903e7"));
    assert_eq!(emit(|e| e.put_negative(1)), hex!("20"));
    assert_eq!(emit(|e| e.put_negative(24)), hex!("37"));
    assert_eq!(
        emit(|e| e.put_negative(18446744073709551615)),
        hex!("3bfffffffffffffffe")
    );

    assert_eq!(emit(|e| e.put_false()), hex!("f4"));
    assert_eq!(emit(|e| e.put_true()), hex!("f5"));
    assert_eq!(emit(|e| e.put_nil()), hex!("f6"));
    assert_eq!(emit(|e| e.put_bool(true)), hex!("f5"));
    assert_eq!(emit(|e| e.put_simple_value(16)), hex!("f0"));
    assert_eq!(emit(|e| e.put_simple_value(255)), hex!("f8ff"));

    assert_eq!(
        emit(|e| Ok(e.put_tag(1)? + e.put_unsigned(1363896240)?)),
        hex!("c11a514b67b0")
    );
    assert_eq!(
        emit(|e| Ok(e.put_tag(24)? + e.put_bytes(b"dIETF")?)),
        hex!("d818456449455446")
    );

    assert_eq!(emit(|e| e.put_bytes(&[])), hex!("40"));
    assert_eq!(emit(|e| e.put_bytes(&hex!("01020304"))), hex!("4401020304"));
    assert_eq!(emit(|e| e.put_text("")), hex!("60"));
    assert_eq!(emit(|e| e.put_text("a")), hex!("6161"));
    assert_eq!(emit(|e| e.put_text("ab")), hex!("626162"));
    assert_eq!(emit(|e| e.put_text("IETF")), hex!("6449455446"));
    assert_eq!(emit(|e| e.put_text("\u{00fc}")), hex!("62c3bc"));
    assert_eq!(emit(|e| e.put_text("\u{6c34}")), hex!("63e6b0b4"));

    assert_eq!(emit(|e| e.put_array(0)), hex!("80"));
    assert_eq!(
        emit(|e| Ok(e.put_array(2)? + e.put_unsigned(1)? + e.put_unsigned(2)?)),
        hex!("820102")
    );
    assert_eq!(
        emit(|e| {
            let mut n = e.put_array(3)?;
            n += e.put_unsigned(1)?;
            n += e.put_array(2)?;
            n += e.put_unsigned(2)?;
            n += e.put_unsigned(3)?;
            n += e.put_array(2)?;
            n += e.put_unsigned(4)?;
            n += e.put_unsigned(5)?;
            Ok(n)
        }),
        hex!("8301820203820405")
    );
    assert_eq!(
        emit(|e| {
            let mut n = e.put_array(25)?;
            for i in 1..=25 {
                n += e.put_unsigned(i)?;
            }
            Ok(n)
        }),
        hex!("98190102030405060708090a0b0c0d0e0f101112131415161718181819")
    );

    assert_eq!(emit(|e| e.put_map(0)), hex!("a0"));
    assert_eq!(
        emit(|e| Ok(e.put_map(1)? + e.put_unsigned(1)? + e.put_unsigned(2)?)),
        hex!("a10102")
    );
    assert_eq!(
        emit(|e| {
            let mut n = e.put_map(2)?;
            n += e.put_text("a")?;
            n += e.put_unsigned(1)?;
            n += e.put_text("b")?;
            n += e.put_array(2)?;
            n += e.put_unsigned(2)?;
            n += e.put_unsigned(3)?;
            Ok(n)
        }),
        hex!("a26161016162820203")
    );
    assert_eq!(
        emit(|e| {
            let mut n = e.put_array(2)?;
            n += e.put_text("a")?;
            n += e.put_map(1)?;
            n += e.put_text("b")?;
            n += e.put_text("c")?;
            Ok(n)
        }),
        hex!("826161a161626163")
    );
}

#[test]
fn minimal_length() {
    for (value, len) in [
        (0u64, 1),
        (23, 1),
        (24, 2),
        (255, 2),
        (256, 3),
        (65535, 3),
        (65536, 5),
        (u32::MAX as u64, 5),
        (u32::MAX as u64 + 1, 9),
        (u64::MAX, 9),
    ] {
        let unsigned = emit(|e| e.put_unsigned(value));
        assert_eq!(unsigned.len(), len, "unsigned {value}");

        // Every major type shares the unsigned head width
        assert_eq!(emit(|e| e.put_tag(value)).len(), len, "tag {value}");
        if value < u64::MAX {
            let negative = emit(|e| e.put_negative(value + 1));
            assert_eq!(negative.len(), len, "negative {value}");
            assert_eq!(negative[0], unsigned[0] | 0x20);
            assert_eq!(negative[1..], unsigned[1..]);
        }
    }
}

#[test]
fn capacity_errors() {
    let mut buf = [0u8; 2];
    let mut e = Encoder::new(&mut buf);
    assert_eq!(
        e.put_unsigned(256),
        Err(Error::NotEnoughData {
            needed: 3,
            remaining: 2
        })
    );
    assert_eq!(e.offset(), 0);

    // The length prefix fits but the payload does not: nothing is written
    assert_eq!(
        e.put_text("ab"),
        Err(Error::NotEnoughData {
            needed: 3,
            remaining: 2
        })
    );
    assert_eq!(e.offset(), 0);

    assert_eq!(e.put_text("a"), Ok(2));
    assert!(e.put_nil().is_err());
    assert!(e.put_array(0).is_err());
    assert_eq!(e.written(), hex!("6161"));

    let mut empty = [0u8; 0];
    let mut e = Encoder::new(&mut empty);
    assert!(e.put_true().is_err());
    assert!(e.put_false().is_err());
    assert!(e.put_bytes(&[]).is_err());
}

#[test]
fn reserved_simple_values() {
    let mut buf = [0u8; 2];
    let mut e = Encoder::new(&mut buf);
    for value in 24..32 {
        assert_eq!(e.put_simple_value(value), Err(Error::Unsupported(value)));
    }
    assert_eq!(e.offset(), 0);
    assert_eq!(e.put_simple_value(23), Ok(1));
    assert_eq!(
        e.put_simple_value(32),
        Err(Error::NotEnoughData {
            needed: 2,
            remaining: 1
        })
    );
    assert_eq!(e.written(), hex!("f7"));
}

#[test]
fn zero_magnitude() {
    let mut buf = [0u8; 9];
    let mut e = Encoder::new(&mut buf);
    assert_eq!(e.put_negative(0), Err(Error::ZeroMagnitude));
    assert_eq!(e.offset(), 0);
}

#[test]
fn number_extremes() {
    assert_eq!(emit(|e| e.put_number(i64::MAX)), hex!("1b7fffffffffffffff"));
    assert_eq!(emit(|e| e.put_number(i64::MIN)), hex!("3b7fffffffffffffff"));
    assert_eq!(emit(|e| e.put_number(0)), hex!("00"));
}
