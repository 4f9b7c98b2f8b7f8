//! Fixed vocabularies of the MIPS32 assembly language.

/// Named general-purpose registers, indexed by register number.
pub(super) const REGISTER_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Assembler directives.
pub(super) const DIRECTIVES: &[&str] = &[
    ".align",
    ".ascii",
    ".asciiz",
    ".byte",
    ".data",
    ".double",
    ".end_macro",
    ".eqv",
    ".extern",
    ".float",
    ".globl",
    ".half",
    ".include",
    ".kdata",
    ".ktext",
    ".macro",
    ".set",
    ".space",
    ".text",
    ".word",
];

/// Instruction mnemonics, basic and pseudo, in lower case.
pub(super) const MNEMONICS: &[&str] = &[
    // Arithmetic and logic
    "add", "addu", "addi", "addiu", "sub", "subu", "and", "andi", "or", "ori", "xor", "xori",
    "nor", "sll", "sllv", "srl", "srlv", "sra", "srav", "slt", "sltu", "slti", "sltiu", "lui",
    "mult", "multu", "div", "divu", "mfhi", "mflo", "mthi", "mtlo", "madd", "maddu", "msub",
    "msubu", "mul", "clo", "clz", "movn", "movz", "movf", "movt",
    // Branches and jumps
    "beq", "bne", "bgez", "bgezal", "bgtz", "blez", "bltz", "bltzal", "j", "jal", "jr", "jalr",
    "b", "beqz", "bnez", "bge", "bgt", "ble", "blt", "bgeu", "bgtu", "bleu", "bltu",
    // Loads and stores
    "lb", "lbu", "lh", "lhu", "lw", "lwl", "lwr", "ll", "sb", "sh", "sw", "swl", "swr", "sc",
    "ulw", "usw", "ulh", "ulhu", "ush", "ld", "sd",
    // Pseudo-instructions
    "la", "li", "move", "neg", "negu", "not", "abs", "rem", "remu", "rol", "ror", "seq", "sne",
    "sge", "sgeu", "sgt", "sgtu", "sle", "sleu", "subi", "subiu",
    // System and traps
    "syscall", "break", "eret", "nop", "teq", "teqi", "tne", "tnei", "tge", "tgeu", "tgei",
    "tgeiu", "tlt", "tltu", "tlti", "tltiu", "mfc0", "mtc0",
    // Coprocessor 1
    "mfc1", "mtc1", "mfc1.d", "mtc1.d", "add.s", "add.d", "sub.s", "sub.d", "mul.s", "mul.d",
    "div.s", "div.d", "abs.s", "abs.d", "neg.s", "neg.d", "mov.s", "mov.d", "sqrt.s", "sqrt.d",
    "cvt.s.d", "cvt.d.s", "cvt.w.s", "cvt.w.d", "cvt.s.w", "cvt.d.w", "c.eq.s", "c.eq.d",
    "c.lt.s", "c.lt.d", "c.le.s", "c.le.d", "bc1f", "bc1t", "lwc1", "swc1", "ldc1", "sdc1",
    "l.s", "l.d", "s.s", "s.d", "floor.w.s", "floor.w.d", "ceil.w.s", "ceil.w.d", "round.w.s",
    "round.w.d", "trunc.w.s", "trunc.w.d", "movf.s", "movf.d", "movt.s", "movt.d", "movn.s",
    "movn.d", "movz.s", "movz.d",
];
