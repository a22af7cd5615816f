compile_descriptors! {
    /// Per-MSDU receive status flags. Most frame-type flags are only set on the first MSDU.
    #[words(1)]
    descriptor rx_attention: RxAttention {
        first_mpdu @0 [0:0];
        last_mpdu @0 [1:1];
        mcast_bcast @0 [2:2];
        peer_idx_invalid @0 [3:3];
        peer_idx_timeout @0 [4:4];
        power_mgmt @0 [5:5];
        non_qos @0 [6:6];
        null_data @0 [7:7];
        mgmt_type @0 [8:8];
        ctrl_type @0 [9:9];
        more_data @0 [10:10];
        eosp @0 [11:11];
        u_apsd_trigger @0 [12:12];
        fragment @0 [13:13];
        order @0 [14:14];
        classification @0 [15:15];
        overflow_err @0 [16:16];
        msdu_length_err @0 [17:17];
        tcp_udp_chksum_fail @0 [18:18];
        ip_chksum_fail @0 [19:19];
        sa_idx_invalid @0 [20:20];
        da_idx_invalid @0 [21:21];
        sa_idx_timeout @0 [22:22];
        da_idx_timeout @0 [23:23];
        encrypt_required @0 [24:24];
        directed @0 [25:25];
        buffer_fragment @0 [26:26];
        mpdu_length_err @0 [27:27];
        tkip_mic_err @0 [28:28];
        decrypt_err @0 [29:29];
        fcs_err @0 [30:30];
        // Set by hardware once the whole status has been written.
        msdu_done @0 [31:31];
    }
}

impl RxAttention {
    /// A stand-alone MPDU carries both the first and last flags; interior A-MPDU subframes
    /// carry neither.
    pub fn is_standalone_mpdu(&self) -> bool {
        self.first_mpdu() != 0 && self.last_mpdu() != 0
    }

    pub fn checksum_failed(&self) -> bool {
        self.tcp_udp_chksum_fail() != 0 || self.ip_chksum_fail() != 0
    }
}
