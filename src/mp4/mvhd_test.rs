#[cfg(test)]
mod tests {
    use crate::errors::Mp4Error;
    use crate::mp4::fixtures::{mvhd_v0_payload, mvhd_v1_payload};
    use crate::mp4::mvhd::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_parse_version_0() {
        let header = MovieHeader::parse(&mvhd_v0_payload(1000, 45000)).unwrap();
        assert_eq!(header.version(), 0);
        assert_eq!(header.timescale(), 1000);
        assert_eq!(header.ticks(), 45000);
        assert_eq!(header.creation_time(), 0xd0c0_ffee);
        assert_eq!(header.modification_time(), 0xd0c0_fff0);
        assert_eq!(header.duration().unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn test_parse_version_1() {
        let header = MovieHeader::parse(&mvhd_v1_payload(1000, 90000)).unwrap();
        assert_eq!(header.version(), 1);
        assert_eq!(parse_mvhd(&mvhd_v1_payload(1000, 90000)).unwrap(), (1000, 90000));
        assert_eq!(header.duration().unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_minimum_payloads_are_enough() {
        let v0 = &mvhd_v0_payload(600, 1200)[..20];
        assert_eq!(parse_mvhd(v0).unwrap(), (600, 1200));
        let v1 = &mvhd_v1_payload(600, 1200)[..32];
        assert_eq!(parse_mvhd(v1).unwrap(), (600, 1200));
    }

    #[test]
    fn test_short_payloads_are_malformed() {
        let err = parse_mvhd(&mvhd_v0_payload(600, 1200)[..19]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed container: mvhd v0 payload is 19 bytes, need at least 20"
        );

        // A v1 header cut at the v0 size must not be read with the v0 layout
        let err = parse_mvhd(&mvhd_v1_payload(600, 1200)[..20]).unwrap_err();
        assert!(matches!(err, Mp4Error::MalformedContainer { .. }));

        let err = parse_mvhd(&[]).unwrap_err();
        assert!(matches!(err, Mp4Error::MalformedContainer { .. }));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let mut payload = mvhd_v1_payload(1000, 90000);
        payload[0] = 2;
        assert!(matches!(
            parse_mvhd(&payload),
            Err(Mp4Error::UnsupportedVersion { version: 2 })
        ));
        assert!(matches!(
            parse_mvhd(&[0xff]),
            Err(Mp4Error::UnsupportedVersion { version: 0xff })
        ));
    }

    #[test]
    fn test_zero_timescale_is_rejected() {
        for ticks in [0u32, 1, 45000, u32::MAX] {
            assert!(matches!(
                parse_mvhd(&mvhd_v0_payload(0, ticks)),
                Err(Mp4Error::InvalidTimescale)
            ));
        }
        assert!(matches!(
            parse_mvhd(&mvhd_v1_payload(0, u64::MAX)),
            Err(Mp4Error::InvalidTimescale)
        ));
        assert!(matches!(
            ticks_to_duration(10, 0),
            Err(Mp4Error::InvalidTimescale)
        ));
    }

    #[test]
    fn test_flags_are_decoded() {
        let mut payload = mvhd_v0_payload(1000, 1);
        payload[1..4].copy_from_slice(&[0x01, 0x02, 0x03]);
        match MovieHeader::parse(&payload).unwrap() {
            MovieHeader::V0 { flags, .. } => assert_eq!(flags, 0x010203),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fractional_durations() {
        assert_eq!(
            ticks_to_duration(1001, 30000).unwrap(),
            Duration::new(0, 33_366_666)
        );
        assert_eq!(
            ticks_to_duration(90_000 * 3 + 45_000, 90_000).unwrap(),
            Duration::from_millis(3500)
        );
        assert_eq!(ticks_to_duration(1, u32::MAX).unwrap(), Duration::new(0, 0));
    }

    #[test]
    fn test_large_tick_counts_do_not_overflow() {
        let d = ticks_to_duration(u64::MAX, 1).unwrap();
        assert_eq!(d.as_secs(), u64::MAX);
        assert_eq!(d.subsec_nanos(), 0);

        let d = ticks_to_duration(u64::MAX, u32::MAX).unwrap();
        assert_eq!(d.as_secs(), u64::MAX / u64::from(u32::MAX));
    }

    #[test]
    fn test_wall_clock_times() {
        // 1970-01-01 expressed in the 1904 epoch
        let payload = {
            let mut p = mvhd_v1_payload(1000, 1);
            p[4..12].copy_from_slice(&MP4_EPOCH_OFFSET.to_be_bytes());
            p[12..20].copy_from_slice(&(MP4_EPOCH_OFFSET + 60).to_be_bytes());
            p
        };
        let header = MovieHeader::parse(&payload).unwrap();
        assert_eq!(header.created_at(), Some(UNIX_EPOCH));
        assert_eq!(
            header.modified_at(),
            Some(UNIX_EPOCH + Duration::from_secs(60))
        );

        let zeroed = MovieHeader::V0 {
            flags: 0,
            creation_time: 0,
            modification_time: 0,
            timescale: 1,
            duration: 0,
        };
        assert_eq!(zeroed.created_at(), None);
    }
}
