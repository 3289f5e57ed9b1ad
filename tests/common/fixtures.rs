//! Static iptables log corpora used across harnesses.
//!
//! Lines are shaped like real `LOG` target output as written by syslog:
//! a 15-character timestamp, host, `kernel:` tag, optional prefix, then
//! `KEY=value` tokens and bare flags.

/// Broadcast chatter that the built-in table drops.
pub const CORPUS_NOISE: &[&str] = &[
    "Jan  1 00:00:00 gw kernel: [IPT] IN=eth0 OUT= MAC=ff:ff:ff:ff:ff:ff SRC=0.0.0.0 DST=255.255.255.255 LEN=328 PROTO=UDP SPT=68 DPT=67 LEN=308",
    "Jan  1 00:00:02 gw kernel: [IPT] IN= OUT=eth0 SRC=192.168.1.1 DST=192.168.1.255 LEN=78 PROTO=UDP SPT=137 DPT=137 LEN=58",
    "Jan  1 00:00:03 gw kernel: [IPT] IN=eth0 OUT= SRC=192.168.1.20 DST=192.168.1.255 LEN=229 PROTO=UDP SPT=138 DPT=138 LEN=209",
    "Jan  1 00:00:04 gw kernel: [IPT] IN=wlan1 OUT= SRC=0.0.0.0 DST=255.255.255.255 LEN=328 PROTO=UDP SPT=68 DPT=67 LEN=308",
    "Jan  1 00:00:05 gw kernel: [IPT] IN= OUT=wlan1 SRC=10.0.0.1 DST=10.0.0.42 LEN=328 PROTO=UDP SPT=67 DPT=68 LEN=308",
    "Jan 1 00:00:00 kernel: PROTO=UDP IN=eth0 OUT= SRC=10.0.0.5 DST=10.0.0.1 SPT=68 DPT=67",
];

/// Traffic the built-in table keeps.
pub const CORPUS_KEEP: &[&str] = &[
    "Jan 1 00:00:01 kernel: PROTO=TCP IN=eth0 OUT=wlan1 SRC=10.0.0.5 DST=8.8.8.8 SPT=5000 DPT=443",
    "Jan  1 00:01:00 gw kernel: [IPT] IN=eth0 OUT= SRC=203.0.113.9 DST=192.168.1.10 LEN=60 TTL=51 PROTO=TCP SPT=44321 DPT=22 WINDOW=29200 SYN URGP=0",
    "Jan  1 00:01:01 gw kernel: [IPT] IN=eth0 OUT= SRC=192.168.1.20 DST=192.168.1.255 LEN=78 PROTO=UDP SPT=137 DPT=139",
    "Jan  1 00:01:02 gw kernel: [IPT] IN=wlan0 OUT= SRC=0.0.0.0 DST=255.255.255.255 PROTO=UDP SPT=68 DPT=67",
    "Jan  1 00:01:03 gw kernel: [IPT] IN=eth0 OUT=wlan1 SRC=10.0.0.7 DST=1.1.1.1 LEN=84 PROTO=ICMP TYPE=8 CODE=0 ID=1 SEQ=1",
];

/// Lines that carry no field tokens at all.
pub const CORPUS_MALFORMED: &[&str] = &[
    "",
    "x",
    "-- MARK --",
    "Jan  1 00:02:00 gw kernel: device eth0 entered promiscuous mode",
    "lowercase=tokens are=ignored",
];

/// Mixed corpus as a single newline-joined stream.
pub fn mixed_stream() -> String {
    let mut lines: Vec<&str> = Vec::new();
    lines.extend_from_slice(CORPUS_NOISE);
    lines.extend_from_slice(CORPUS_KEEP);
    lines.extend_from_slice(CORPUS_MALFORMED);
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

/// Number of lines in [`mixed_stream`] expected to survive the built-in table.
pub fn mixed_stream_survivors() -> usize {
    CORPUS_KEEP.len() + CORPUS_MALFORMED.len()
}

/// Generate `n` synthetic log lines, every fourth of them DHCP noise.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 4 == 0 {
                format!(
                    "Jan  1 00:{:02}:{:02} gw kernel: IN=eth0 OUT= SRC=0.0.0.0 DST=255.255.255.255 PROTO=UDP SPT=68 DPT=67",
                    i / 60 % 60,
                    i % 60
                )
            } else {
                format!(
                    "Jan  1 00:{:02}:{:02} gw kernel: IN=eth0 OUT=wlan1 SRC=10.0.{}.{} DST=8.8.8.8 PROTO=TCP SPT={} DPT=443",
                    i / 60 % 60,
                    i % 60,
                    i / 256 % 256,
                    i % 256,
                    1024 + i % 60000
                )
            }
        })
        .collect()
}
