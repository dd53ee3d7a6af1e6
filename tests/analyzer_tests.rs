//! Integration tests for the technique catalog and the analysis report.

use riscv_hazard_analyzer::isa::{Program, NOP};
use riscv_hazard_analyzer::pipeline::hazards::detect_data;
use riscv_hazard_analyzer::pipeline::resolve::insert_nops;
use riscv_hazard_analyzer::pipeline::{analyze_all, PipelineAnalyzer, Technique, CATALOG};

/// Encodes `add rd, rs1, rs2`.
fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    (rs2 << 20) | (rs1 << 15) | (rd << 7) | 0x33
}

/// Encodes `addi rd, rs1, imm`.
fn addi(rd: u32, rs1: u32, imm: u32) -> u32 {
    (imm << 20) | (rs1 << 15) | (rd << 7) | 0x13
}

/// Encodes `beq rs1, rs2, 8`.
fn beq(rs1: u32, rs2: u32) -> u32 {
    (rs2 << 20) | (rs1 << 15) | (4 << 8) | 0x63
}

/// Encodes `sw rs2, 0(rs1)`.
fn sw(rs2: u32, rs1: u32) -> u32 {
    (rs2 << 20) | (rs1 << 15) | (2 << 12) | 0x23
}

/// lw x5, 8(x2) ; add x6, x5, x7 ; beq x6, x0 ; addi x8, x9, 1 ; sw x8, 0(x2)
fn mixed_program() -> Vec<u32> {
    vec![0x00812283, add(6, 5, 7), beq(6, 0), addi(8, 9, 1), sw(8, 2)]
}

/// add x1, x2, x3 ; add x6, x7, x8 ; add x4, x1, x5
fn gapped_program() -> Vec<u32> {
    vec![add(1, 2, 3), add(6, 7, 8), add(4, 1, 5)]
}

/// Tests the empty program reports zero everywhere.
#[test]
fn test_empty_program() {
    let report = analyze_all(&Program::decode(&[]));

    assert_eq!(report.results.len(), 9);
    assert_eq!(report.original_len, 0);
    for r in report.iter() {
        assert_eq!(r.conflicts, 0);
        assert_eq!(r.overhead, 0);
        assert!(r.words.is_empty());
    }
}

/// Tests results follow catalog order.
#[test]
fn test_result_order() {
    let report = analyze_all(&Program::decode(&mixed_program()));
    let order: Vec<Technique> = report.iter().map(|r| r.technique).collect();

    assert_eq!(order, Technique::ALL.to_vec());
    assert_eq!(
        CATALOG.iter().map(|s| s.technique).collect::<Vec<_>>(),
        order
    );
    assert_eq!(report.results[8].technique.name(), "9_combined");
}

/// Tests detection-only techniques report conflict counts and keep the program.
#[test]
fn test_detect_only_techniques() {
    let words = mixed_program();
    let report = analyze_all(&Program::decode(&words));

    let t1 = report.get(Technique::NoForwardingDetect).unwrap();
    assert_eq!(t1.words, words);
    assert_eq!(t1.conflicts, 3);
    assert_eq!(t1.overhead, 0);
    assert_eq!(t1.score(), 3);

    let t2 = report.get(Technique::ForwardingDetect).unwrap();
    assert_eq!(t2.words, words);
    assert_eq!(t2.conflicts, 0);
    assert_eq!(t2.score(), 0);
}

/// Tests adjacent RAW hazards cost no NOPs under the gap rule.
#[test]
fn test_adjacent_hazards_cost_nothing() {
    let words = mixed_program();
    let report = analyze_all(&Program::decode(&words));

    let t3 = report.get(Technique::NoForwardingNops).unwrap();
    assert_eq!(t3.words, words);
    assert_eq!(t3.overhead, 0);

    let t5 = report.get(Technique::NoForwardingReorder).unwrap();
    assert_eq!(t5.words, words);
}

/// Tests control NOPs and the delayed branch on a program with a branch.
#[test]
fn test_control_techniques() {
    let words = mixed_program();
    let report = analyze_all(&Program::decode(&words));

    let t7 = report.get(Technique::ControlNops).unwrap();
    assert_eq!(t7.conflicts, 2);
    assert_eq!(t7.overhead, 4);
    assert_eq!(&t7.words[..3], &words[..3]);
    assert_eq!(&t7.words[3..7], &[NOP; 4]);
    assert_eq!(&t7.words[7..], &words[3..]);
    assert_eq!(t7.score(), 4);

    let t8 = report.get(Technique::DelayedBranch).unwrap();
    assert_eq!(t8.words, words);
    assert_eq!(t8.overhead, 0);
}

/// Tests stall and reorder techniques on a gapped RAW hazard.
#[test]
fn test_gapped_hazard_techniques() {
    let words = gapped_program();
    let report = analyze_all(&Program::decode(&words));

    let t3 = report.get(Technique::NoForwardingNops).unwrap();
    assert_eq!(t3.words, vec![words[0], NOP, words[1], words[2]]);
    assert_eq!(t3.overhead, 1);

    let t4 = report.get(Technique::ForwardingNops).unwrap();
    assert_eq!(t4.conflicts, 1);
    assert_eq!(t4.words, words);
    assert_eq!(t4.overhead, 0);

    let t5 = report.get(Technique::NoForwardingReorder).unwrap();
    assert_eq!(t5.words, vec![words[1], words[0], words[2]]);
    assert_eq!(t5.overhead, 0);

    let t6 = report.get(Technique::ForwardingReorder).unwrap();
    assert_eq!(t6.words, words);
}

/// Tests the combined technique reports the forwarding reorder result.
#[test]
fn test_combined_matches_forwarding_reorder() {
    for words in [mixed_program(), gapped_program()] {
        let report = analyze_all(&Program::decode(&words));
        let t6 = report.get(Technique::ForwardingReorder).unwrap();
        let t9 = report.get(Technique::Combined).unwrap();

        assert_eq!(t9.words, t6.words);
        assert_eq!(t9.overhead, t6.overhead);
        assert_eq!(t9.conflicts, t6.conflicts);
    }
}

/// Tests the stall technique agrees with calling the resolver directly.
#[test]
fn test_matches_direct_resolver() {
    let words = gapped_program();
    let program = Program::decode(&words);
    let report = analyze_all(&program);
    let direct = insert_nops(&program, &detect_data(&program, false), false);

    assert_eq!(report.get(Technique::NoForwardingNops).unwrap().words, direct);
    assert_eq!(report.conflicts.no_forwarding, detect_data(&program, false));
    assert_eq!(report.conflicts.forwarding, detect_data(&program, true));
}

/// Tests repeated analysis is stable and tracing does not change results.
#[test]
fn test_analyzer_repeatable() {
    let program = Program::decode(&mixed_program());
    let first = PipelineAnalyzer::new(&program).analyze_all();
    let second = PipelineAnalyzer::new(&program).with_trace(true).analyze_all();

    assert_eq!(first, second);
    assert_eq!(first, analyze_all(&program));
}

/// Tests overhead is never negative and matches the length difference.
#[test]
fn test_overhead_is_length_difference() {
    for words in [mixed_program(), gapped_program()] {
        let report = analyze_all(&Program::decode(&words));
        for r in report.iter() {
            assert!(r.words.len() >= words.len());
            assert_eq!(r.overhead, r.words.len() - words.len());
        }
    }
}

/// Tests the table rendering lists every technique.
#[test]
fn test_report_render() {
    let report = analyze_all(&Program::decode(&gapped_program()));
    let table = report.render();

    assert!(table.contains("PIPELINE HAZARD ANALYSIS"));
    for technique in Technique::ALL {
        assert!(table.contains(technique.name()));
    }
}

/// Tests the JSON report uses stable names and hex words.
#[test]
fn test_report_json() {
    let report = analyze_all(&Program::decode(&gapped_program()));
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["original_len"], 3);
    assert_eq!(value["results"][2]["technique"], "3_no_forwarding_nops");
    assert_eq!(value["results"][2]["overhead"], 1);
    assert_eq!(value["results"][2]["words"][1], "00000013");
    assert_eq!(value["conflicts"]["no_forwarding"][0]["kind"], "RAW");
}
