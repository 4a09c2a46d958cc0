// Property-based coverage for the representation header:
// round-trip, count invariant, and equal consumption of both decode modes.

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use proptest::prelude::*;
    use iris_core::{
        codec::IrisRecord,
        headers::RepresentationHeader,
        image_info::ImageInformation,
        quality::IrisQualityBlock,
    };

    fn quality_block() -> impl Strategy<Value = IrisQualityBlock> {
        (prop_oneof![0u8..=100, Just(255u8)], any::<u16>(), any::<u16>())
            .prop_map(|(score, vendor, algorithm)| IrisQualityBlock::new(score, vendor, algorithm).unwrap())
    }

    fn image_information() -> impl Strategy<Value = ImageInformation> {
        (0u8..=2, any::<u8>(), any::<u8>(), any::<u16>(), any::<u16>(), any::<[u16; 6]>()).prop_map(
            |(eye, image_type, image_format, width, height, rest)| ImageInformation {
                eye_label: eye,
                image_type,
                image_format,
                image_properties: image_type & 0x3F,
                width,
                height,
                bit_depth: 8,
                range: rest[0],
                roll_angle_of_eye: rest[1],
                roll_angle_uncertainty: rest[2],
                iris_center_smallest_x: rest[3],
                iris_center_largest_x: rest[4],
                iris_center_smallest_y: rest[5],
                iris_center_largest_y: rest[5] / 2,
                iris_diameter_smallest: rest[0] / 3,
                iris_diameter_largest: rest[1] / 3,
            },
        )
    }

    fn header() -> impl Strategy<Value = RepresentationHeader> {
        (
            0u32..=1 << 24,
            // 0001-01-01 .. 9999-12-31 in whole milliseconds
            -62_135_596_800_000i64..253_402_300_799_999i64,
            prop_oneof![Just(0u8), Just(1u8)],
            0u16..=0xFFFE,
            0u16..=0xFFFE,
            prop::collection::vec(quality_block(), 0..=255),
            image_information(),
            1u16..=u16::MAX,
        )
            .prop_map(|(payload, millis, tech, vendor, device_type, blocks, info, n)| {
                let at = DateTime::from_timestamp_millis(millis).unwrap();
                RepresentationHeader::from_fields_with_device(payload, at, tech, vendor, device_type, blocks, info, n)
                    .unwrap()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_decode_full_roundtrip(h in header()) {
            let bytes = h.to_bytes().unwrap();
            prop_assert_eq!(bytes.len() as u32, h.record_length());
            prop_assert_eq!(&bytes[0..4], &h.total_length().unwrap().to_be_bytes()[..]);

            let decoded = RepresentationHeader::decode_full(&bytes[..]).unwrap();
            prop_assert!(decoded.is_clean());
            prop_assert_eq!(decoded.record.no_of_quality_blocks() as usize, decoded.record.quality_blocks().len());
            prop_assert_eq!(decoded.record, h);
        }

        #[test]
        fn prop_image_info_only_consumes_same_bytes(h in header()) {
            let bytes = h.to_bytes().unwrap();
            let full = RepresentationHeader::decode_full(&bytes[..]).unwrap();
            let partial = RepresentationHeader::decode_image_info_only(&bytes[..]).unwrap();

            prop_assert_eq!(partial.bytes_consumed, full.bytes_consumed);
            prop_assert_eq!(partial.record.quality_blocks().len(), h.quality_blocks().len());
            prop_assert_eq!(partial.record.representation_number(), h.representation_number());
            prop_assert_eq!(partial.record.representation_data_length(), h.representation_data_length());
            prop_assert_eq!(partial.record.image_information().width, h.image_information().width);
            prop_assert_eq!(partial.record.image_information().height, h.image_information().height);
        }

        #[test]
        fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..400)) {
            // Either a record or a typed error; lenient decode never aborts on values.
            if let Ok(decoded) = RepresentationHeader::decode_full(&bytes[..]) {
                prop_assert!(decoded.bytes_consumed <= bytes.len() as u64);
                prop_assert_eq!(decoded.bytes_consumed, u64::from(decoded.record.record_length()));
            }
        }
    }
}
