//! I define [`RuleCatalog`], the closed set of rules used by a [`Reasoner`](crate::Reasoner),
//! as well as [`StandardRule`], the rules of the
//! [RDFS](https://www.w3.org/TR/rdf11-mt/#rdfs-entailment) and
//! [OWL 2 RL](https://www.w3.org/TR/owl2-profiles/#Reasoning_in_OWL_2_RL_and_RDF_Graphs_using_Rules)
//! entailment regimes.
//!
//! # List membership
//!
//! OWL 2 RL rules testing one member of an `rdf:List`
//! (`cls-int2`, `cls-uni`, `cls-oo`, `eq-diff2`, `eq-diff3`, `prp-adp`, `cax-adc`,
//! `scm-int`, `scm-uni`) rely on the auxiliary rules `list-member#1` and `list-member#2`,
//! which link every cell of a list to each of its members with the [`LIST_MEMBER`] predicate.
//! These auxiliary triples are part of the closure;
//! they can be filtered out by their predicate when querying or saving the store.
//!
//! # Limitations
//!
//! * OWL 2 RL rules requiring *every* member of a list at once
//!   (`cls-int1`, `prp-spo2`, `prp-key`) can not be expressed as a fixed list of triple patterns,
//!   and are not provided.
//! * Datatype rules (`dt-*`) are not provided.
//! * `eq-ref` is not provided, as it would make every term `owl:sameAs` itself.
use crate::error::ConfigError;
use crate::rule::Rule;
use std::collections::HashSet;

/// The predicate linking each cell of an `rdf:List` to each member of the list,
/// inferred by the `list-member#1` and `list-member#2` rules of [`RuleCatalog::owl_rl`].
pub const LIST_MEMBER: &str = "urn:x-closure:listMember";

mod _owl_rl;
mod _rdfs;

/// An ordered, closed list of [`Rule`]s.
///
/// The order of rules has no influence on the result of the closure,
/// only on the order in which derivations are credited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog from the given rules.
    ///
    /// NB: the rules are checked when the catalog is passed to [`Reasoner::new`](crate::Reasoner::new).
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleCatalog { rules }
    }

    /// The RDFS entailment rules.
    pub fn rdfs() -> Self {
        StandardRule::RDFS.iter().map(|r| r.rule()).collect()
    }

    /// The OWL 2 RL rules that can be expressed with a fixed antecedent.
    pub fn owl_rl() -> Self {
        StandardRule::OWL_RL.iter().map(|r| r.rule()).collect()
    }

    /// The union of [`rdfs`](Self::rdfs) and [`owl_rl`](Self::owl_rl).
    pub fn standard() -> Self {
        let mut seen = HashSet::new();
        StandardRule::RDFS
            .iter()
            .chain(StandardRule::OWL_RL)
            .filter(|r| seen.insert(**r))
            .map(|r| r.rule())
            .collect()
    }

    /// The rules of this catalog.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The number of rules in this catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether this catalog contains no rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get the rule named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Keep only the rules matching one of the given `names`.
    ///
    /// A name matches a rule if it is the name of the rule,
    /// or the family of the rule (e.g. `scm-cls` matches `scm-cls#1` to `scm-cls#4`).
    ///
    /// Fails if one of the `names` does not match any rule.
    pub fn only<I, S>(&self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = self.check_names(names)?;
        Ok(self
            .rules
            .iter()
            .filter(|r| names.iter().any(|n| name_matches(n, r.name())))
            .cloned()
            .collect())
    }

    /// Remove the rules matching one of the given `names`.
    ///
    /// See [`only`](Self::only) for how names are matched.
    pub fn without<I, S>(&self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = self.check_names(names)?;
        Ok(self
            .rules
            .iter()
            .filter(|r| !names.iter().any(|n| name_matches(n, r.name())))
            .cloned()
            .collect())
    }

    /// Check that all `names` match at least one rule of this catalog.
    fn check_names<I, S>(&self, names: I) -> Result<Vec<String>, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|n| {
                let n = n.as_ref();
                if self.rules.iter().any(|r| name_matches(n, r.name())) {
                    Ok(n.to_string())
                } else {
                    Err(ConfigError::UnknownRule(n.to_string()))
                }
            })
            .collect()
    }
}

fn name_matches(name: &str, rule_name: &str) -> bool {
    rule_name == name || rule_name.split_once('#').is_some_and(|(family, _)| family == name)
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<Rule> for RuleCatalog {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        RuleCatalog::new(iter.into_iter().collect())
    }
}

/// The standard entailment rules.
///
/// Rule names are those of the
/// [OWL 2 RL/RDF rules](https://www.w3.org/TR/owl2-profiles/#Reasoning_in_OWL_2_RL_and_RDF_Graphs_using_Rules)
/// and, for RDFS rules with no OWL 2 RL counterpart, of the
/// [RDFS entailment patterns](https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment-informative).
/// W3C rules with several conclusions are split into one rule per conclusion,
/// named `<w3c-name>#<n>`.
/// The auxiliary rules computing [`LIST_MEMBER`] are named `list-member#1` and `list-member#2`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardRule {
    // list membership
    ListMember1,
    ListMember2,
    // equality
    EqSym,
    EqTrans,
    EqRepS,
    EqRepP,
    EqRepO,
    EqDiff1,
    EqDiff2,
    EqDiff3,
    // properties
    PrpDom,
    PrpRng,
    PrpFp,
    PrpIfp,
    PrpIrp,
    PrpSymp,
    PrpAsp,
    PrpTrp,
    PrpSpo1,
    PrpEqp1,
    PrpEqp2,
    PrpPdw,
    PrpAdp,
    PrpInv1,
    PrpInv2,
    PrpNpa1,
    PrpNpa2,
    // classes
    ClsThing,
    ClsNothing1,
    ClsNothing2,
    ClsInt2,
    ClsUni,
    ClsCom,
    ClsSvf1,
    ClsSvf2,
    ClsAvf,
    ClsHv1,
    ClsHv2,
    ClsMaxc1,
    ClsMaxc2,
    ClsMaxqc1,
    ClsMaxqc2,
    ClsMaxqc3,
    ClsMaxqc4,
    ClsOo,
    // class axioms
    CaxSco,
    CaxEqc1,
    CaxEqc2,
    CaxDw,
    CaxAdc,
    // schema
    ScmCls1,
    ScmCls2,
    ScmCls3,
    ScmCls4,
    ScmSco,
    ScmEqc1a,
    ScmEqc1b,
    ScmEqc2,
    ScmOp1,
    ScmOp2,
    ScmDp1,
    ScmDp2,
    ScmSpo,
    ScmEqp1a,
    ScmEqp1b,
    ScmEqp2,
    ScmDom1,
    ScmDom2,
    ScmRng1,
    ScmRng2,
    ScmHv,
    ScmSvf1,
    ScmSvf2,
    ScmAvf1,
    ScmAvf2,
    ScmInt,
    ScmUni,
    // RDFS only
    Rdfs6,
    Rdfs8,
    Rdfs10,
    Rdfs12,
    Rdfs13,
}

impl StandardRule {
    /// The rules of [`RuleCatalog::rdfs`].
    pub const RDFS: &'static [StandardRule] = _rdfs::RDFS;

    /// The rules of [`RuleCatalog::owl_rl`].
    pub const OWL_RL: &'static [StandardRule] = _owl_rl::OWL_RL;

    /// The name of this rule.
    pub fn name(self) -> &'static str {
        use StandardRule::*;
        match self {
            ListMember1 => "list-member#1",
            ListMember2 => "list-member#2",
            EqSym => "eq-sym",
            EqTrans => "eq-trans",
            EqRepS => "eq-rep-s",
            EqRepP => "eq-rep-p",
            EqRepO => "eq-rep-o",
            EqDiff1 => "eq-diff1",
            EqDiff2 => "eq-diff2",
            EqDiff3 => "eq-diff3",
            PrpDom => "prp-dom",
            PrpRng => "prp-rng",
            PrpFp => "prp-fp",
            PrpIfp => "prp-ifp",
            PrpIrp => "prp-irp",
            PrpSymp => "prp-symp",
            PrpAsp => "prp-asp",
            PrpTrp => "prp-trp",
            PrpSpo1 => "prp-spo1",
            PrpEqp1 => "prp-eqp1",
            PrpEqp2 => "prp-eqp2",
            PrpPdw => "prp-pdw",
            PrpAdp => "prp-adp",
            PrpInv1 => "prp-inv1",
            PrpInv2 => "prp-inv2",
            PrpNpa1 => "prp-npa1",
            PrpNpa2 => "prp-npa2",
            ClsThing => "cls-thing",
            ClsNothing1 => "cls-nothing1",
            ClsNothing2 => "cls-nothing2",
            ClsInt2 => "cls-int2",
            ClsUni => "cls-uni",
            ClsCom => "cls-com",
            ClsSvf1 => "cls-svf1",
            ClsSvf2 => "cls-svf2",
            ClsAvf => "cls-avf",
            ClsHv1 => "cls-hv1",
            ClsHv2 => "cls-hv2",
            ClsMaxc1 => "cls-maxc1",
            ClsMaxc2 => "cls-maxc2",
            ClsMaxqc1 => "cls-maxqc1",
            ClsMaxqc2 => "cls-maxqc2",
            ClsMaxqc3 => "cls-maxqc3",
            ClsMaxqc4 => "cls-maxqc4",
            ClsOo => "cls-oo",
            CaxSco => "cax-sco",
            CaxEqc1 => "cax-eqc1",
            CaxEqc2 => "cax-eqc2",
            CaxDw => "cax-dw",
            CaxAdc => "cax-adc",
            ScmCls1 => "scm-cls#1",
            ScmCls2 => "scm-cls#2",
            ScmCls3 => "scm-cls#3",
            ScmCls4 => "scm-cls#4",
            ScmSco => "scm-sco",
            ScmEqc1a => "scm-eqc1#1",
            ScmEqc1b => "scm-eqc1#2",
            ScmEqc2 => "scm-eqc2",
            ScmOp1 => "scm-op#1",
            ScmOp2 => "scm-op#2",
            ScmDp1 => "scm-dp#1",
            ScmDp2 => "scm-dp#2",
            ScmSpo => "scm-spo",
            ScmEqp1a => "scm-eqp1#1",
            ScmEqp1b => "scm-eqp1#2",
            ScmEqp2 => "scm-eqp2",
            ScmDom1 => "scm-dom1",
            ScmDom2 => "scm-dom2",
            ScmRng1 => "scm-rng1",
            ScmRng2 => "scm-rng2",
            ScmHv => "scm-hv",
            ScmSvf1 => "scm-svf1",
            ScmSvf2 => "scm-svf2",
            ScmAvf1 => "scm-avf1",
            ScmAvf2 => "scm-avf2",
            ScmInt => "scm-int",
            ScmUni => "scm-uni",
            Rdfs6 => "rdfs6",
            Rdfs8 => "rdfs8",
            Rdfs10 => "rdfs10",
            Rdfs12 => "rdfs12",
            Rdfs13 => "rdfs13",
        }
    }

    /// Build the [`Rule`] corresponding to this standard rule.
    pub fn rule(self) -> Rule {
        use StandardRule::*;
        match self {
            ListMember1 => _owl_rl::list_member1(),
            ListMember2 => _owl_rl::list_member2(),
            EqSym => _owl_rl::eq_sym(),
            EqTrans => _owl_rl::eq_trans(),
            EqRepS => _owl_rl::eq_rep_s(),
            EqRepP => _owl_rl::eq_rep_p(),
            EqRepO => _owl_rl::eq_rep_o(),
            EqDiff1 => _owl_rl::eq_diff1(),
            EqDiff2 => _owl_rl::eq_diff2(),
            EqDiff3 => _owl_rl::eq_diff3(),
            PrpDom => _owl_rl::prp_dom(),
            PrpRng => _owl_rl::prp_rng(),
            PrpFp => _owl_rl::prp_fp(),
            PrpIfp => _owl_rl::prp_ifp(),
            PrpIrp => _owl_rl::prp_irp(),
            PrpSymp => _owl_rl::prp_symp(),
            PrpAsp => _owl_rl::prp_asp(),
            PrpTrp => _owl_rl::prp_trp(),
            PrpSpo1 => _owl_rl::prp_spo1(),
            PrpEqp1 => _owl_rl::prp_eqp1(),
            PrpEqp2 => _owl_rl::prp_eqp2(),
            PrpPdw => _owl_rl::prp_pdw(),
            PrpAdp => _owl_rl::prp_adp(),
            PrpInv1 => _owl_rl::prp_inv1(),
            PrpInv2 => _owl_rl::prp_inv2(),
            PrpNpa1 => _owl_rl::prp_npa1(),
            PrpNpa2 => _owl_rl::prp_npa2(),
            ClsThing => _owl_rl::cls_thing(),
            ClsNothing1 => _owl_rl::cls_nothing1(),
            ClsNothing2 => _owl_rl::cls_nothing2(),
            ClsInt2 => _owl_rl::cls_int2(),
            ClsUni => _owl_rl::cls_uni(),
            ClsCom => _owl_rl::cls_com(),
            ClsSvf1 => _owl_rl::cls_svf1(),
            ClsSvf2 => _owl_rl::cls_svf2(),
            ClsAvf => _owl_rl::cls_avf(),
            ClsHv1 => _owl_rl::cls_hv1(),
            ClsHv2 => _owl_rl::cls_hv2(),
            ClsMaxc1 => _owl_rl::cls_maxc1(),
            ClsMaxc2 => _owl_rl::cls_maxc2(),
            ClsMaxqc1 => _owl_rl::cls_maxqc1(),
            ClsMaxqc2 => _owl_rl::cls_maxqc2(),
            ClsMaxqc3 => _owl_rl::cls_maxqc3(),
            ClsMaxqc4 => _owl_rl::cls_maxqc4(),
            ClsOo => _owl_rl::cls_oo(),
            CaxSco => _owl_rl::cax_sco(),
            CaxEqc1 => _owl_rl::cax_eqc1(),
            CaxEqc2 => _owl_rl::cax_eqc2(),
            CaxDw => _owl_rl::cax_dw(),
            CaxAdc => _owl_rl::cax_adc(),
            ScmCls1 => _owl_rl::scm_cls1(),
            ScmCls2 => _owl_rl::scm_cls2(),
            ScmCls3 => _owl_rl::scm_cls3(),
            ScmCls4 => _owl_rl::scm_cls4(),
            ScmSco => _owl_rl::scm_sco(),
            ScmEqc1a => _owl_rl::scm_eqc1a(),
            ScmEqc1b => _owl_rl::scm_eqc1b(),
            ScmEqc2 => _owl_rl::scm_eqc2(),
            ScmOp1 => _owl_rl::scm_op1(),
            ScmOp2 => _owl_rl::scm_op2(),
            ScmDp1 => _owl_rl::scm_dp1(),
            ScmDp2 => _owl_rl::scm_dp2(),
            ScmSpo => _owl_rl::scm_spo(),
            ScmEqp1a => _owl_rl::scm_eqp1a(),
            ScmEqp1b => _owl_rl::scm_eqp1b(),
            ScmEqp2 => _owl_rl::scm_eqp2(),
            ScmDom1 => _owl_rl::scm_dom1(),
            ScmDom2 => _owl_rl::scm_dom2(),
            ScmRng1 => _owl_rl::scm_rng1(),
            ScmRng2 => _owl_rl::scm_rng2(),
            ScmHv => _owl_rl::scm_hv(),
            ScmSvf1 => _owl_rl::scm_svf1(),
            ScmSvf2 => _owl_rl::scm_svf2(),
            ScmAvf1 => _owl_rl::scm_avf1(),
            ScmAvf2 => _owl_rl::scm_avf2(),
            ScmInt => _owl_rl::scm_int(),
            ScmUni => _owl_rl::scm_uni(),
            Rdfs6 => _rdfs::rdfs6(),
            Rdfs8 => _rdfs::rdfs8(),
            Rdfs10 => _rdfs::rdfs10(),
            Rdfs12 => _rdfs::rdfs12(),
            Rdfs13 => _rdfs::rdfs13(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn standard_rules_are_valid() {
        for r in StandardRule::RDFS.iter().chain(StandardRule::OWL_RL) {
            let rule = r.rule();
            assert_eq!(rule.name(), r.name());
            rule.validate().unwrap_or_else(|e| panic!("{rule}: {e}"));
        }
    }

    #[test]
    fn standard_is_union() {
        let rdfs = RuleCatalog::rdfs();
        let owl_rl = RuleCatalog::owl_rl();
        let standard = RuleCatalog::standard();
        for r in rdfs.rules().iter().chain(owl_rl.rules()) {
            assert_eq!(standard.get(r.name()), Some(r));
        }
        let mut names: Vec<_> = standard.rules().iter().map(Rule::name).collect();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len, "duplicate names in standard catalog");
    }

    #[test_case("cax-sco", 1)]
    #[test_case("scm-cls", 4)]
    #[test_case("scm-cls#2", 1)]
    #[test_case("prp-dom", 1)]
    fn only(name: &str, expected: usize) {
        let catalog = RuleCatalog::standard().only([name]).unwrap();
        assert_eq!(catalog.len(), expected);
    }

    #[test]
    fn without() {
        let standard = RuleCatalog::standard();
        let catalog = standard.without(["scm-cls", "cax-sco"]).unwrap();
        assert_eq!(catalog.len(), standard.len() - 5);
        assert!(catalog.get("cax-sco").is_none());
        assert!(catalog.get("cax-eqc1").is_some());
    }

    #[test]
    fn unknown_rule() {
        assert_eq!(
            RuleCatalog::rdfs().only(["cls-svf1"]),
            Err(ConfigError::UnknownRule("cls-svf1".into()))
        );
        assert!(RuleCatalog::rdfs().without(["nope"]).is_err());
    }

    #[test]
    fn list_member_is_a_valid_iri() {
        assert!(closure_term::Iri::new(LIST_MEMBER).is_ok());
    }

    #[test_case("cls-uni")]
    #[test_case("eq-diff3")]
    #[test_case("cax-adc")]
    fn list_rules_use_membership(name: &str) {
        let catalog = RuleCatalog::owl_rl();
        let rule = catalog.get(name).unwrap();
        assert!(rule.to_string().contains(LIST_MEMBER), "{rule}");
        assert!(catalog.get("list-member#1").is_some());
        assert!(catalog.get("list-member#2").is_some());
    }

    #[test]
    fn rdfs_has_no_owl_vocabulary() {
        for rule in RuleCatalog::rdfs().rules() {
            assert!(
                !rule.to_string().contains(closure_term::ns::owl::PREFIX),
                "{rule}"
            );
        }
    }
}
