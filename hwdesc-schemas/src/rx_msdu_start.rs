compile_descriptors! {
    /// Frame format after decapsulation.
    enum DecapFormat {
        // No decapsulation.
        RAW = 0;
        NATIVE_WIFI = 1;
        // Ethernet 2 (DIX).
        ETHERNET2 = 2;
        // 802.3 (SNAP/LLC).
        SNAP_LLC = 3;
    }

    /// Receive status for the start of an MSDU.
    #[words(3)]
    descriptor rx_msdu_start: RxMsduStart {
        // Bytes after decapsulation.
        msdu_length @0 [13:0];
        // Only valid if ipv4_proto or ipv6_proto is set.
        ip_offset @0 [19:14];
        ring_mask @0 [23:20];
        // Zero means the offset is longer than 127 bytes.
        tcp_udp_offset @0 [30:24];
        reserved_0c @0 [31:31] reserved;
        flow_id_crc @1 [31:0];
        // Wraps modulo 256.
        msdu_number @2 [7:0];
        decap_format @2 [9:8] enum DecapFormat;
        ipv4_proto @2 [10:10];
        ipv6_proto @2 [11:11];
        tcp_proto @2 [12:12];
        udp_proto @2 [13:13];
        ip_frag @2 [14:14];
        tcp_only_ack @2 [15:15];
        sa_idx @2 [26:16];
        reserved_2b @2 [31:27] reserved;
    }
}

impl RxMsduStart {
    pub fn decap_format_enum(&self) -> DecapFormat {
        DecapFormat(self.decap_format())
    }
}
