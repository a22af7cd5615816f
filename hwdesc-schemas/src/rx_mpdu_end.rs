compile_descriptors! {
    /// Receive status written by the MAC after the last MSDU of an MPDU.
    #[words(1)]
    descriptor rx_mpdu_end: RxMpduEnd {
        reserved_0 @0 [12:0] reserved;
        // The PCU receive FIFO ran out of space; the rest of the PPDU is filtered.
        overflow_err @0 [13:13];
        last_mpdu @0 [14:14];
        // Only valid when last_mpdu is set.
        post_delim_err @0 [15:15];
        // Only valid when last_mpdu is set.
        post_delim_cnt @0 [27:16];
        mpdu_length_err @0 [28:28];
        tkip_mic_err @0 [29:29];
        decrypt_err @0 [30:30];
        fcs_err @0 [31:31];
    }
}

impl RxMpduEnd {
    /// Whether any of the MPDU error bits is set.
    pub fn has_error(&self) -> bool {
        self.overflow_err() != 0
            || self.mpdu_length_err() != 0
            || self.tkip_mic_err() != 0
            || self.decrypt_err() != 0
            || self.fcs_err() != 0
    }
}

#[cfg(test)]
mod tests {
    use hwdesc_codec::{decode, FieldValues};
    use hwdesc_words::Words;

    use super::{RxMpduEnd, RX_MPDU_END_DESC};

    fn only(name: &'static str) -> FieldValues {
        RX_MPDU_END_DESC
            .fields
            .iter()
            .map(|field| (field.name, (field.name == name) as u32))
            .collect()
    }

    #[test]
    fn error_bits() {
        assert_eq!(
            decode(&RX_MPDU_END_DESC, Words(&[0x80000000])),
            Ok(only("fcs_err")),
        );
        assert_eq!(
            decode(&RX_MPDU_END_DESC, Words(&[0x40000000])),
            Ok(only("decrypt_err")),
        );
    }

    #[test]
    fn accessors() {
        let status = RxMpduEnd([0x0abc6000]);
        assert_eq!(status.overflow_err(), 1);
        assert_eq!(status.last_mpdu(), 1);
        assert_eq!(status.post_delim_err(), 0);
        assert_eq!(status.post_delim_cnt(), 0xabc);
        assert!(status.has_error());
        assert!(!RxMpduEnd([0x00004000]).has_error());
    }

    #[test]
    fn header_constants() {
        assert_eq!(RxMpduEnd::RESERVED_0.mask(), 0x00001fff);
        assert_eq!(RxMpduEnd::POST_DELIM_CNT.mask(), 0x0fff0000);
        assert_eq!(RxMpduEnd::FCS_ERR.lsb(), 31);
        assert_eq!(RxMpduEnd::FCS_ERR.mask(), 0x80000000);
    }
}
