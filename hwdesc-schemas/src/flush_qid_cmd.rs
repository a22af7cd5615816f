//! Queue manager command that deletes frames from an MPDU transmit queue.

/// Value of `cmd_id` identifying a flush QID command.
pub const FLUSH_QID_CMD_ID: u32 = 0x2;

compile_descriptors! {
    /// Which frames a flush QID command removes.
    enum FlushCtrl {
        FLUSH_ALL = 0;
        // Only frames that have been transmitted before, i.e. with a non-zero retry count.
        FLUSH_RETRY_ONLY = 1;
    }

    /// Flush QID command, as written to the queue manager's command FIFO.
    #[words(4)]
    descriptor flush_qid_cmd: FlushQidCmd {
        cmd_id @0 [3:0] legal(2);
        reserved_0a @0 [7:4] reserved;
        // Opaque to the queue manager; lets software match the command to its originator.
        sw_cmd_ref @0 [15:8];
        qid @0 [29:16];
        reserved_0b @0 [31:30] reserved;
        flush_ctrl @1 [0:0] enum FlushCtrl;
        reserved_1 @1 [31:1] reserved;
        reserved_2 @2 [31:0] reserved;
        reserved_3 @3 [31:0] reserved;
    }
}

impl FlushQidCmd {
    /// A flush command for `qid` with the command ID already filled in.
    pub fn new(
        qid: u32,
        flush_ctrl: FlushCtrl,
        sw_cmd_ref: u32,
    ) -> Result<Self, hwdesc_codec::CodecError> {
        let mut cmd = Self::default();
        cmd.set_cmd_id(FLUSH_QID_CMD_ID)?;
        cmd.set_sw_cmd_ref(sw_cmd_ref)?;
        cmd.set_qid(qid)?;
        cmd.set_flush_ctrl(flush_ctrl.to_u32())?;
        Ok(cmd)
    }

    pub fn flush_ctrl_enum(&self) -> FlushCtrl {
        FlushCtrl(self.flush_ctrl())
    }
}
