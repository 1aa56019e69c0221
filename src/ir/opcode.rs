//! Primitive instruction opcodes.
//!
//! The set mirrors the primitive instructions of the SSA IR the backend
//! lowers. Every opcode carries a static [`OpInfo`] record.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Terminators
    Ret,
    Br,
    Switch,
    IndirectBr,
    Unreachable,

    // Arithmetic
    FNeg,
    Add,
    FAdd,
    Sub,
    FSub,
    Mul,
    FMul,
    UDiv,
    SDiv,
    FDiv,
    URem,
    SRem,
    FRem,

    // Bitwise
    Shl,
    LShr,
    AShr,
    And,
    Or,
    Xor,

    // Memory
    Alloca,
    Load,
    Store,
    GetElementPtr,
    Fence,

    // Casts
    Trunc,
    ZExt,
    SExt,
    FPToUI,
    FPToSI,
    UIToFP,
    SIToFP,
    FPTrunc,
    FPExt,
    PtrToInt,
    IntToPtr,
    BitCast,

    // Other
    ICmp,
    FCmp,
    Phi,
    Select,
    Call,
    VaArg,
    ExtractElement,
    InsertElement,
    ShuffleVector,
    ExtractValue,
    InsertValue,
}

#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    pub name: &'static str,
    pub is_terminator: bool,
    pub is_cast: bool,
}

const fn op(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        is_terminator: false,
        is_cast: false,
    }
}

const fn term(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        is_terminator: true,
        is_cast: false,
    }
}

const fn cast(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        is_terminator: false,
        is_cast: true,
    }
}

impl Opcode {
    pub const ALL: [Opcode; 52] = [
        Opcode::Ret, Opcode::Br, Opcode::Switch, Opcode::IndirectBr, Opcode::Unreachable,
        Opcode::FNeg, Opcode::Add, Opcode::FAdd, Opcode::Sub, Opcode::FSub, Opcode::Mul,
        Opcode::FMul, Opcode::UDiv, Opcode::SDiv, Opcode::FDiv, Opcode::URem, Opcode::SRem,
        Opcode::FRem, Opcode::Shl, Opcode::LShr, Opcode::AShr, Opcode::And, Opcode::Or,
        Opcode::Xor, Opcode::Alloca, Opcode::Load, Opcode::Store, Opcode::GetElementPtr,
        Opcode::Fence, Opcode::Trunc, Opcode::ZExt, Opcode::SExt, Opcode::FPToUI,
        Opcode::FPToSI, Opcode::UIToFP, Opcode::SIToFP, Opcode::FPTrunc, Opcode::FPExt,
        Opcode::PtrToInt, Opcode::IntToPtr, Opcode::BitCast, Opcode::ICmp, Opcode::FCmp,
        Opcode::Phi, Opcode::Select, Opcode::Call, Opcode::VaArg, Opcode::ExtractElement,
        Opcode::InsertElement, Opcode::ShuffleVector, Opcode::ExtractValue,
        Opcode::InsertValue,
    ];

    pub const fn info(self) -> OpInfo {
        use Opcode::*;
        match self {
            Ret => term("ret"),
            Br => term("br"),
            Switch => term("switch"),
            IndirectBr => term("indirectbr"),
            Unreachable => term("unreachable"),
            FNeg => op("fneg"),
            Add => op("add"),
            FAdd => op("fadd"),
            Sub => op("sub"),
            FSub => op("fsub"),
            Mul => op("mul"),
            FMul => op("fmul"),
            UDiv => op("udiv"),
            SDiv => op("sdiv"),
            FDiv => op("fdiv"),
            URem => op("urem"),
            SRem => op("srem"),
            FRem => op("frem"),
            Shl => op("shl"),
            LShr => op("lshr"),
            AShr => op("ashr"),
            And => op("and"),
            Or => op("or"),
            Xor => op("xor"),
            Alloca => op("alloca"),
            Load => op("load"),
            Store => op("store"),
            GetElementPtr => op("getelementptr"),
            Fence => op("fence"),
            Trunc => cast("trunc"),
            ZExt => cast("zext"),
            SExt => cast("sext"),
            FPToUI => cast("fptoui"),
            FPToSI => cast("fptosi"),
            UIToFP => cast("uitofp"),
            SIToFP => cast("sitofp"),
            FPTrunc => cast("fptrunc"),
            FPExt => cast("fpext"),
            PtrToInt => cast("ptrtoint"),
            IntToPtr => cast("inttoptr"),
            BitCast => cast("bitcast"),
            ICmp => op("icmp"),
            FCmp => op("fcmp"),
            Phi => op("phi"),
            Select => op("select"),
            Call => op("call"),
            VaArg => op("va_arg"),
            ExtractElement => op("extractelement"),
            InsertElement => op("insertelement"),
            ShuffleVector => op("shufflevector"),
            ExtractValue => op("extractvalue"),
            InsertValue => op("insertvalue"),
        }
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn is_terminator(self) -> bool {
        self.info().is_terminator
    }

    pub const fn is_cast(self) -> bool {
        self.info().is_cast
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Opcode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("unknown opcode '{s}'"))
    }
}
