//! Roster construction.

/// Build the roster broadcast to every member.
///
/// Identities are sorted for deterministic output. Each connection
/// contributes one entry, so shared identities appear more than once.
pub fn build_roster<'a>(identities: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut roster: Vec<String> = identities.into_iter().map(str::to_string).collect();
    roster.sort();
    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_roster_with_no_members() {
        // テスト項目: 参加者がいない場合、空のロスターが返される
        // given (前提条件):
        let identities: Vec<&str> = vec![];

        // when (操作):
        let result = build_roster(identities);

        // then (期待する結果):
        assert!(result.is_empty());
    }

    #[test]
    fn test_build_roster_sorts_identities() {
        // テスト項目: ロスターは identity の昇順に並ぶ
        // given (前提条件):
        let identities = vec!["charlie", "alice", "bob"];

        // when (操作):
        let result = build_roster(identities);

        // then (期待する結果):
        assert_eq!(result, vec!["alice", "bob", "charlie"]);
    }

    #[test]
    fn test_build_roster_keeps_shared_identities() {
        // テスト項目: 同じ identity の接続が複数ある場合、接続ごとにエントリが残る
        // given (前提条件):
        let identities = vec!["Anonymous", "alice", "Anonymous"];

        // when (操作):
        let result = build_roster(identities);

        // then (期待する結果):
        assert_eq!(result, vec!["Anonymous", "Anonymous", "alice"]);
    }
}
